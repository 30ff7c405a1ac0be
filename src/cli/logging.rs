//! Logging utilities for CLI output
//!
//! Diagnostics go to stderr; stdout carries nothing but schedule values,
//! so piping `ritmo` into a file or another tool stays clean.

/// Log level for CLI diagnostics
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all diagnostics
    Quiet,
    /// Normal diagnostic level
    Normal,
    /// Verbose diagnostics with parameter details
    Verbose,
}

/// Log a diagnostic message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        eprintln!("{msg}");
    }
}
