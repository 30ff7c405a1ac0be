//! Schedule command implementation

use crate::cli::args::{Cli, OutputFormat};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::schedule::cosine_learning_rates;
use serde::Serialize;

/// Parameters and values of a generated schedule, for structured output
#[derive(Serialize)]
pub(crate) struct ScheduleReport {
    pub lr_min: f64,
    pub lr_max: f64,
    pub frequency: f64,
    pub samples: usize,
    pub values: Vec<f64>,
}

pub fn run_schedule(args: Cli, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Generating {} samples over {} cycles in [{}, {}]",
            args.samples, args.frequency, args.lr_min, args.lr_max
        ),
    );

    let values = cosine_learning_rates(args.lr_min, args.lr_max, args.frequency, args.samples);

    match args.format {
        OutputFormat::Text => {
            for value in &values {
                println!("{value:.7}");
            }
        }
        OutputFormat::Json => {
            let report = report(&args, values);
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let report = report(&args, values);
            let yaml = serde_yaml::to_string(&report)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}

fn report(args: &Cli, values: Vec<f64>) -> ScheduleReport {
    ScheduleReport {
        lr_min: args.lr_min,
        lr_max: args.lr_max,
        frequency: args.frequency,
        samples: args.samples,
        values,
    }
}
