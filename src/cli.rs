//! Command-line interface definitions for DupeFinder.
//!
//! This module defines all CLI arguments using the clap derive API. The
//! parsed [`Cli`] value is the application's configuration record: it is
//! constructed once in `main` and passed by value into `run_app`, so nothing
//! about the run lives in process-wide state.
//!
//! # Example
//!
//! ```bash
//! # Scan the current directory, report to results.txt
//! dupefinder
//!
//! # Scan a tree recursively, report to the screen
//! dupefinder ~/Downloads -r -s
//!
//! # JSON report to a chosen file, overwriting without prompting
//! dupefinder ~/Downloads -r -o dupes.json --format json --yes
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Exact duplicate file reporter.
///
/// DupeFinder iterates through a directory (optionally recursively) and
/// reports files that are byte-to-byte equal. It never modifies the scanned
/// tree.
#[derive(Debug, Parser)]
#[command(name = "dupefinder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for duplicates
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Recursively search subdirectories for duplicates
    #[arg(short, long)]
    pub recursive: bool,

    /// Write the report to the specified file
    #[arg(short, long, value_name = "FILE", default_value = "results.txt")]
    pub output: PathBuf,

    /// Print the report to the screen instead of a file
    #[arg(short, long, conflicts_with = "output")]
    pub screen: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Overwrite an existing output file without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format for the duplicate report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text, one duplicate pair per line
    Text,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
