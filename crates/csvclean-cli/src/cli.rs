//! CLI argument definitions for csvclean.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csvclean",
    version,
    about = "csvclean - Clean tabular CSV data without a declared schema",
    long_about = "Clean a CSV file: detect and parse date/time columns, normalize\n\
                  free-text columns, and drop empty and duplicate rows.\n\n\
                  The cleaned copy is written next to the source as\n\
                  <name>_cleaned.<ext>; the source is never modified."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a CSV file (prompts for one when FILE is omitted).
    Clean(CleanArgs),

    /// List candidate CSV files in a directory.
    List(ListArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the CSV file to clean.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory to search when no file is given.
    #[arg(long = "dir", value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Column to exempt from text normalization (repeatable).
    ///
    /// Excluded columns keep their whitespace and casing. Exclusion does
    /// not exempt a column from date detection.
    #[arg(long = "exclude", value_name = "COLUMN")]
    pub exclude: Vec<String>,

    /// Directory for the cleaned file (default: next to the source).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the metrics record as JSON instead of the summary table.
    #[arg(long = "json")]
    pub json: bool,

    /// Clean and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Directory to search for CSV files.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
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
