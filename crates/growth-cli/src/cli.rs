//! CLI argument definitions for the growth z-score tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "growth-zscore",
    version,
    about = "WHO child growth z-scores from the command line",
    long_about = "Compute WHO child growth z-scores and clinical categories.\n\n\
                  Supports length-for-age, weight-for-age, and weight-for-length\n\
                  for children from birth to 2 years, against the WHO Child\n\
                  Growth Standards (2006) LMS reference tables."
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

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

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

    /// Reference data directory (default: the bundled WHO 2006 release,
    /// or GROWTH_STANDARDS_DIR).
    #[arg(long = "standards-dir", value_name = "DIR", global = true)]
    pub standards_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate one measurement into a z-score and category.
    Zscore(ZscoreArgs),

    /// List the loaded reference tables and their coverage.
    Tables,

    /// Verify the reference data directory against its manifest.
    Doctor(DoctorArgs),
}

#[derive(Parser)]
pub struct ZscoreArgs {
    /// Child sex: M or F.
    #[arg(long = "sex", value_name = "M|F")]
    pub sex: String,

    /// Growth indicator: length, weight, or wfl.
    #[arg(long = "indicator", value_name = "NAME")]
    pub indicator: String,

    /// Completed years of age (length and weight indicators).
    #[arg(long = "years", value_name = "N")]
    pub years: Option<u32>,

    /// Additional months of age, 0-11 (length and weight indicators).
    #[arg(long = "months", value_name = "N")]
    pub months: Option<u32>,

    /// Length in centimeters (length measurement, or wfl lookup key).
    #[arg(long = "length", value_name = "CM")]
    pub length: Option<f64>,

    /// Weight in kilograms (weight and wfl indicators).
    #[arg(long = "weight", value_name = "KG")]
    pub weight: Option<f64>,

    /// Emit the result as JSON instead of a human-readable line.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct DoctorArgs {
    /// Emit the report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
