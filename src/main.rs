//! Ritmo CLI
//!
//! Prints a cyclic cosine learning-rate schedule to stdout, one value per
//! line with 7 decimal places.
//!
//! # Usage
//!
//! ```bash
//! # Demonstration schedule: 100 samples, two cycles, bounds [1e-5, 1e-3]
//! ritmo
//!
//! # Custom bounds and cycle count
//! ritmo --lr-min 0.0001 --lr-max 0.01 --frequency 4 --samples 500
//!
//! # Structured output
//! ritmo --format json
//! ```

use clap::Parser;
use ritmo::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
