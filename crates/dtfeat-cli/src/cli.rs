//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dtfeat",
    version,
    about = "Derive calendar and time-of-day features from timestamp columns",
    long_about = "Derive calendar and time-of-day features from timestamp columns.\n\n\
                  Reads a CSV with a timestamp column and emits one feature column set\n\
                  per selected category: calendar, clock, cyclical, business, season."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract features from a CSV file with a timestamp column.
    Extract(ExtractArgs),

    /// List the feature categories and the columns each one produces.
    Categories,
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the feature table to this CSV path instead of printing a preview.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Name of the timestamp column in the input.
    #[arg(long = "timestamp-column", default_value = "datetime")]
    pub timestamp_column: String,

    /// Feature categories to extract (comma-separated; default: all).
    #[arg(long = "features", value_delimiter = ',')]
    pub features: Option<Vec<String>>,

    /// Cyclic transforms to apply (comma-separated; default: sin,cos).
    #[arg(long = "transforms", value_delimiter = ',')]
    pub transforms: Option<Vec<String>>,

    /// Cycle types to encode (comma-separated; default:
    /// second_of_day,minute_of_day).
    #[arg(long = "cycle-types", value_delimiter = ',')]
    pub cycle_types: Option<Vec<String>>,

    /// Maximum number of rows shown in the terminal preview.
    #[arg(long = "limit", default_value_t = 10)]
    pub limit: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
