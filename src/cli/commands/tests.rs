//! CLI command tests
//!
//! Runs the schedule handler end to end for each output format and checks
//! the structured report against the library-generated values.

use super::*;
use crate::cli::args::{parse_args, OutputFormat};
use crate::schedule::cosine_learning_rates;

#[test]
fn test_run_schedule_with_defaults() {
    let cli = parse_args(["ritmo"]).unwrap();
    assert!(schedule::run_schedule(cli, LogLevel::Quiet).is_ok());
}

#[test]
fn test_run_schedule_json_format() {
    let cli = parse_args(["ritmo", "--format", "json", "-n", "8"]).unwrap();
    assert!(schedule::run_schedule(cli, LogLevel::Quiet).is_ok());
}

#[test]
fn test_run_schedule_yaml_format() {
    let cli = parse_args(["ritmo", "--format", "yaml", "-n", "8"]).unwrap();
    assert!(schedule::run_schedule(cli, LogLevel::Quiet).is_ok());
}

#[test]
fn test_run_schedule_zero_samples() {
    let cli = parse_args(["ritmo", "--samples", "0"]).unwrap();
    assert!(schedule::run_schedule(cli, LogLevel::Quiet).is_ok());
}

#[test]
fn test_run_command_quiet_flag() {
    let cli = parse_args(["ritmo", "--quiet", "-n", "4"]).unwrap();
    assert!(run_command(cli).is_ok());
}

#[test]
fn test_run_command_verbose_flag() {
    let cli = parse_args(["ritmo", "--verbose", "-n", "4"]).unwrap();
    assert!(run_command(cli).is_ok());
}

#[test]
fn test_report_serializes_parameters_and_values() {
    let cli = parse_args(["ritmo", "-n", "4", "-f", "1", "--lr-min", "0", "--lr-max", "1"])
        .unwrap();
    let values = cosine_learning_rates(cli.lr_min, cli.lr_max, cli.frequency, cli.samples);
    let report = schedule::ScheduleReport {
        lr_min: cli.lr_min,
        lr_max: cli.lr_max,
        frequency: cli.frequency,
        samples: cli.samples,
        values: values.clone(),
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["samples"], 4);
    assert_eq!(json["frequency"], 1.0);
    assert_eq!(json["values"].as_array().unwrap().len(), values.len());
}

#[test]
fn test_demo_text_format_seven_decimals() {
    // The text format pins every value to exactly 7 digits after the
    // decimal point; the demonstration schedule starts at lr_max.
    let lrs = cosine_learning_rates(1e-5, 1e-3, 2.0, 100);
    assert_eq!(format!("{:.7}", lrs[0]), "0.0010000");
    assert_eq!(format!("{:.7}", lrs[25]), "0.0000100");
}

#[test]
fn test_format_default_is_text() {
    let cli = parse_args(["ritmo"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Text);
}
