//! Command-line interface definitions for suffix-sweep.
//!
//! Global options (verbosity, color, config and store overrides) apply to
//! every subcommand.
//!
//! # Example
//!
//! ```bash
//! # Register a suffix and preview what it would remove
//! suffix-sweep suffixes add -110110
//! suffix-sweep analyze ~/invoices
//!
//! # Propose suffixes from numbered copies and accept them all
//! suffix-sweep detect ~/invoices --accept-all
//!
//! # Delete without prompting
//! suffix-sweep delete ~/invoices --yes
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Delete duplicate files recognized by a registered filename suffix.
///
/// Files whose name ends with one of the registered suffixes (for example
/// `-110110.xml`) are reported by `analyze` and removed by `delete`.
#[derive(Debug, Parser)]
#[command(name = "suffix-sweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Print errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Configuration file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suffix store file (overrides the configured `store_path`)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Extension of the files to consider, e.g. `.xml`
    #[arg(long, global = true, value_name = "EXT")]
    pub extension: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show or edit the registered suffixes
    #[command(subcommand)]
    Suffixes(SuffixCommand),
    /// Report which files in a folder would be deleted
    Analyze(AnalyzeArgs),
    /// Propose suffixes from numbered copies in a folder
    Detect(DetectArgs),
    /// Delete the files an analysis or a saved plan marks
    Delete(DeleteArgs),
}

/// Suffix registry operations.
#[derive(Debug, Subcommand)]
pub enum SuffixCommand {
    /// List registered suffixes with their positions
    List,
    /// Register a suffix; the extension is appended when missing
    Add {
        /// Suffix to add, e.g. `-110110` or `-110110.xml`
        #[arg(value_name = "SUFFIX", allow_hyphen_values = true)]
        suffix: String,
    },
    /// Remove the suffix at a position shown by `list`
    Remove {
        /// 1-based position
        #[arg(value_name = "POSITION")]
        position: usize,
    },
}

/// Arguments for the analyze subcommand.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Folder to analyze
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Save the files marked for deletion as a plan for `delete --plan`
    #[arg(long, value_name = "FILE")]
    pub save_plan: Option<PathBuf>,
}

/// Arguments for the detect subcommand.
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Folder to inspect
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: ReportFormat,

    /// Register a detected candidate (can be specified multiple times)
    #[arg(long, value_name = "SUFFIX", allow_hyphen_values = true)]
    pub accept: Vec<String>,

    /// Register every detected candidate
    #[arg(long, conflicts_with = "accept")]
    pub accept_all: bool,
}

/// Arguments for the delete subcommand.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Folder to analyze and clean
    #[arg(value_name = "PATH", required_unless_present = "plan")]
    pub path: Option<PathBuf>,

    /// Delete exactly the files listed in a saved plan
    #[arg(long, value_name = "FILE", conflicts_with = "path")]
    pub plan: Option<PathBuf>,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Output format for the summary
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: ReportFormat,
}

/// Output format for analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Text,
    /// JSON output for scripting
    Json,
    /// CSV output for spreadsheets
    Csv,
}

/// Output format for detection and deletion reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable listing
    Text,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
