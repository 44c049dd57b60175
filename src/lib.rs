//! DupeFinder - Exact Duplicate File Reporter
//!
//! A cross-platform Rust CLI application that scans a directory tree and
//! reports files that are byte-for-byte duplicates of one another. Candidates
//! are grouped by size first, then confirmed by exact content comparison, so
//! no file content is ever read unless another file of the same size exists.
//!
//! The tool only reports duplicates; it never mutates the scanned tree.

pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::duplicates::{Report, Resolver, ResolverConfig};
use crate::error::ExitCode;
use crate::output::{confirm_overwrite, OutputDestination, OverwriteChoice};
use crate::scanner::{ScanError, Walker};

/// Scan `root` for exact duplicate files and return the resulting report.
///
/// This is the single entry point into the core: collection and resolution
/// run as two sequential phases. Collection enumerates every regular file
/// under `root` (direct children only unless `recursive` is set); resolution
/// buckets the candidates by size and confirms duplicates by byte comparison.
///
/// # Errors
///
/// Fails only if `root` does not exist, is not a directory, or cannot be
/// opened for listing. Errors on individual entries or during comparison are
/// recovered internally and never abort the run.
pub fn detect_duplicates(root: &Path, recursive: bool) -> Result<Report, ScanError> {
    let candidates = Walker::new(root, recursive).collect()?;
    let resolver = Resolver::new(ResolverConfig::default());
    Ok(resolver.resolve(candidates))
}

/// Run the application logic and return the exit code.
///
/// Resolves the output destination (prompting before overwriting an existing
/// file unless `--yes` was given), runs detection, and renders the report.
///
/// # Errors
///
/// Returns an error for an invalid scan root or an unwritable output
/// destination; `main` maps those to exit codes.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let destination = match resolve_destination(&cli)? {
        Some(dest) => dest,
        // User answered (C)ancel at the overwrite prompt.
        None => {
            println!("Canceling execution.");
            return Ok(ExitCode::Success);
        }
    };

    log::info!(
        "Scanning {} ({})",
        cli.path.display(),
        if cli.recursive {
            "recursive"
        } else {
            "this directory only"
        }
    );

    let report = detect_duplicates(&cli.path, cli.recursive)
        .with_context(|| format!("Failed to scan {}", cli.path.display()))?;

    log::debug!("Detection finished: {} duplicate(s)", report.duplicate_count());

    destination.write_report(&report, cli.format)?;

    Ok(ExitCode::Success)
}

/// Work out where the report goes, prompting about existing files.
///
/// Returns `None` when the user cancels at the overwrite prompt.
fn resolve_destination(cli: &Cli) -> Result<Option<OutputDestination>> {
    if cli.screen {
        return Ok(Some(OutputDestination::screen()));
    }

    if cli.output.exists() && !cli.yes {
        // The prompt reads stdin directly, so piped input drives it too.
        if confirm_overwrite(&cli.output)? == OverwriteChoice::Cancel {
            return Ok(None);
        }
    }

    log::info!("Outputting data to {}", cli.output.display());
    Ok(Some(OutputDestination::file(cli.output.clone())))
}
