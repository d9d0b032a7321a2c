//! CLI argument definitions for the BMI calculator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use bmi_model::Gender;

#[derive(Parser)]
#[command(
    name = "bmi",
    version,
    about = "BMI Calculator - Classify a body-mass-index into clinical bands",
    long_about = "Compute a body-mass-index from weight (kg) and height (cm)\n\
                  and classify it into one of six clinical bands, each with a\n\
                  fixed label and explanatory guidance."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a submission, compute the BMI, and classify it.
    Assess(AssessArgs),

    /// List the six clinical bands and their BMI ranges.
    Conditions,
}

#[derive(Parser)]
pub struct AssessArgs {
    /// Gender selection (validated for presence; does not affect the result).
    #[arg(long = "gender", value_enum)]
    pub gender: Option<GenderArg>,

    /// Weight in kilograms (e.g. 56).
    #[arg(long = "weight", value_name = "KG")]
    pub weight: Option<f64>,

    /// Height in centimeters (e.g. 168).
    #[arg(long = "height", value_name = "CM")]
    pub height: Option<f64>,

    /// Print the assessment as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI gender choices, mirroring the form's fixed three-item selection.
#[derive(Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Others,
    Woman,
    Men,
}

impl From<GenderArg> for Gender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Others => Gender::Others,
            GenderArg::Woman => Gender::Woman,
            GenderArg::Men => Gender::Men,
        }
    }
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
