//! Output handling for duplicate reports.
//!
//! This module owns everything between the finished [`Report`] and the user:
//! - Text rendering (one duplicate pair per line)
//! - JSON rendering for scripting
//! - Destination handling (screen vs. file) and the overwrite prompt
//!
//! The core never touches any of this; it only produces the report.

pub mod json;
pub mod text;

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::cli::ReportFormat;
use crate::duplicates::Report;

/// Errors from the output layer.
///
/// These are the only failures that produce a non-zero exit code besides an
/// invalid scan root.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    /// The output file could not be created or written.
    #[error("Error opening filename {path}: {source}")]
    Unwritable {
        /// The requested output path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing the rendered report failed mid-stream.
    #[error("Error writing report: {0}")]
    Write(#[from] io::Error),
}

/// The user's answer at the overwrite prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteChoice {
    /// Replace the existing file
    Overwrite,
    /// Abort the run with exit code 0
    Cancel,
}

/// Where the rendered report goes.
#[derive(Debug)]
pub enum OutputDestination {
    /// Standard output
    Screen,
    /// A named file, created or truncated at write time
    File(PathBuf),
}

impl OutputDestination {
    /// Destination for `--screen`.
    #[must_use]
    pub fn screen() -> Self {
        Self::Screen
    }

    /// Destination for `--output <FILE>`.
    #[must_use]
    pub fn file(path: PathBuf) -> Self {
        Self::File(path)
    }

    /// Render the report in the requested format and write it out.
    ///
    /// # Errors
    ///
    /// Fails if the output file cannot be created or a write fails.
    pub fn write_report(&self, report: &Report, format: ReportFormat) -> Result<(), OutputError> {
        match self {
            Self::Screen => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                render(report, format, &mut handle)?;
                handle.flush()?;
                Ok(())
            }
            Self::File(path) => {
                let file = File::create(path).map_err(|e| OutputError::Unwritable {
                    path: path.clone(),
                    source: e,
                })?;
                let mut writer = BufWriter::new(file);
                render(report, format, &mut writer)?;
                writer.flush()?;
                Ok(())
            }
        }
    }
}

/// Render the report into `writer` in the requested format.
fn render(report: &Report, format: ReportFormat, writer: &mut impl Write) -> io::Result<()> {
    match format {
        ReportFormat::Text => text::render(report, writer),
        ReportFormat::Json => json::render(report, writer),
    }
}

/// Ask the user whether to overwrite `path`, looping until a valid answer.
///
/// Prompts `(O)verwrite or (C)ancel?` on stdout and reads answers from
/// stdin; anything other than `o` or `c` (case-insensitive) re-prompts.
/// Exhausted input (EOF) counts as cancel so a closed stdin never loops
/// forever.
///
/// # Errors
///
/// Fails only if stdin cannot be read.
pub fn confirm_overwrite(path: &Path) -> io::Result<OverwriteChoice> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    prompt_overwrite(path, &mut lines, &mut io::stdout())
}

/// Testable prompt loop over any line source.
fn prompt_overwrite(
    path: &Path,
    answers: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
) -> io::Result<OverwriteChoice> {
    loop {
        writeln!(out, "Filename: {} exists.", path.display())?;
        write!(out, "(O)verwrite or (C)ancel?: ")?;
        out.flush()?;

        let answer = match answers.next() {
            Some(line) => line?,
            None => return Ok(OverwriteChoice::Cancel),
        };

        match answer.trim().to_lowercase().as_str() {
            "o" => return Ok(OverwriteChoice::Overwrite),
            "c" => return Ok(OverwriteChoice::Cancel),
            _ => writeln!(out, "Error: Incorrect Option.")?,
        }
    }
}
