//! CLI argument definitions for the patient-records cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "prc",
    version,
    about = "Patient Records Cleaner - normalize, impute, and deduplicate patient data",
    long_about = "Clean a tabular patient-records dataset before analysis.\n\n\
                  Standardizes dates and phone numbers, fills missing values,\n\
                  derives binary flags from categorical columns, and removes\n\
                  exact duplicate rows, producing a per-stage audit report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a patient-records CSV file.
    Clean(CleanArgs),

    /// Print the default pipeline configuration as JSON.
    Config,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path for the cleaned CSV (default: <INPUT>_cleaned.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the full run report (cleaned table + stage metrics) as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Pipeline configuration JSON (default: the built-in patient-records
    /// schema and strategies).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run the pipeline and print the summary without writing outputs.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
