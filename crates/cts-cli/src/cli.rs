//! CLI argument definitions for the collection transfer tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "collection-transfer",
    version,
    about = "Collection Transfer Studio - Migrate legacy museum exports",
    long_about = "Convert a legacy tab-delimited collection export into normalized\n\
                  object records with resolved artists, authors, and editors, then\n\
                  submit them to a CollectionSpace-style imports service."
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
    /// Convert a tab-delimited export into a saved extract.
    Convert(ConvertArgs),

    /// Submit a saved extract to the imports service.
    Submit(SubmitArgs),

    /// List the columns of the export schema.
    Columns,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the tab-delimited export file (Mac OS Roman encoded).
    #[arg(value_name = "EXPORT_FILE")]
    pub export_file: PathBuf,

    /// Where to write the extract (default: <EXPORT_FILE>.extract.json).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Character separating repeated values within a cell.
    #[arg(long = "repeat-separator", value_name = "CHAR")]
    pub repeat_separator: Option<char>,
}

#[derive(Parser)]
pub struct SubmitArgs {
    /// Path to a saved extract produced by `convert`.
    #[arg(value_name = "EXTRACT_FILE")]
    pub extract_file: PathBuf,

    /// File listing accession numbers already in the destination, one per line.
    #[arg(long = "imported", value_name = "PATH")]
    pub imported: Option<PathBuf>,

    /// Base URL of the imports service (falls back to the CTS_URL
    /// environment variable).
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Write import documents to a directory instead of submitting.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Output directory for dry-run documents (default: <EXTRACT_FILE dir>/imports).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
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
