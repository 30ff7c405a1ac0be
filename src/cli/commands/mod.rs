//! CLI command implementations

mod schedule;

#[cfg(test)]
mod tests;

use crate::cli::args::Cli;
use crate::cli::LogLevel;

/// Execute the CLI based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure diagnostics based on verbose/quiet flags
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    schedule::run_schedule(cli, log_level)
}
