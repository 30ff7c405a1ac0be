//! CLI module for ritmo
//!
//! This module contains the argument surface, the command handler, and
//! output utilities for the demonstration binary.

mod args;
mod commands;
mod logging;

pub use args::{parse_args, Cli, OutputFormat};
pub use commands::run_command;
pub use logging::LogLevel;
