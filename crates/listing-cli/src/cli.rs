//! CLI argument definitions for the listing converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "listing",
    version,
    about = "Convert product spreadsheets into marketplace registration requests",
    long_about = "Convert product spreadsheet rows into normalized marketplace \
                  product-registration requests.\n\n\
                  Reads a CSV export of the product template, translates statuses, \
                  delivery and carrier labels, resolves categories, and synthesizes \
                  origin and certification blocks."
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Emit span close events (JSON format only).
    #[arg(long = "log-spans", global = true)]
    pub log_spans: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert every row of a product spreadsheet export.
    Convert(ConvertArgs),

    /// List recognized status, delivery and carrier labels.
    Vocabulary(VocabularyArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Product spreadsheet exported as CSV.
    #[arg(value_name = "ROWS_CSV")]
    pub input: PathBuf,

    /// TOML configuration (conversion defaults, classifier rules, vocabulary, origins).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Category table CSV with path and id columns.
    #[arg(long = "categories", value_name = "PATH")]
    pub categories: Option<PathBuf>,

    /// Origin table CSV with name and code columns, appended after configured origins.
    #[arg(long = "origins", value_name = "PATH")]
    pub origins: Option<PathBuf>,

    /// Write converted requests to a JSON file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Validate rows and report every failure without writing requests.
    #[arg(long = "check")]
    pub check: bool,
}

#[derive(Parser)]
pub struct VocabularyArgs {
    /// TOML configuration whose vocabulary extensions should be included.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
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
