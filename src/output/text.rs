//! Human-readable text rendering of the duplicate report.
//!
//! When duplicates were found the output is the count followed by one
//! `<duplicate> is a duplicate of <original>` line per pair; otherwise a
//! single `No duplicates found!` line.

use std::io::{self, Write};

use crate::duplicates::Report;

/// Render the report as plain text into `writer`.
///
/// # Errors
///
/// Propagates any write failure.
pub fn render(report: &Report, writer: &mut impl Write) -> io::Result<()> {
    if report.is_empty() {
        writeln!(writer, "No duplicates found!")?;
        return Ok(());
    }

    writeln!(writer, "{} duplicates found: ", report.duplicate_count())?;
    for pair in report {
        writeln!(writer, "{}", pair)?;
    }
    Ok(())
}
