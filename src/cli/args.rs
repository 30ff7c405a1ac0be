//! CLI argument parsing
//!
//! Defines the argument surface for the `ritmo` binary. Every parameter
//! defaults to the demonstration schedule, so a bare invocation prints
//! 100 samples of two cosine cycles spanning `[1e-5, 1e-3]`.

use clap::Parser;

/// Ritmo: Cyclic Cosine Learning Rate Schedules
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "ritmo")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Generate cyclic cosine learning-rate schedules")]
pub struct Cli {
    /// Learning rate at cosine troughs (lower bound)
    #[arg(long, default_value_t = 1e-5)]
    pub lr_min: f64,

    /// Learning rate at cosine peaks (upper bound, the initial value)
    #[arg(long, default_value_t = 1e-3)]
    pub lr_max: f64,

    /// Number of full cosine cycles across the schedule
    #[arg(short, long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub frequency: f64,

    /// Number of samples to generate
    #[arg(short = 'n', long, default_value_t = 100)]
    pub samples: usize,

    /// Output format (text, json, yaml)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all diagnostics
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for the generated schedule
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    /// One value per line, fixed to 7 decimal places
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json, yaml"
            )),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
