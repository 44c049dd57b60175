//! JSON rendering of the duplicate report.
//!
//! Provides machine-readable output for scripting and automation.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "duplicate_count": 1,
//!   "pairs": [
//!     {
//!       "duplicate_path": "/path/to/b.txt",
//!       "original_path": "/path/to/a.txt"
//!     }
//!   ]
//! }
//! ```

use std::io::{self, Write};

use serde::Serialize;

use crate::duplicates::{DuplicatePair, Report};

/// A single duplicate pair in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonPair {
    /// The file reported as a duplicate
    pub duplicate_path: String,
    /// The file it duplicates
    pub original_path: String,
}

impl JsonPair {
    fn from_pair(pair: &DuplicatePair) -> Self {
        Self {
            duplicate_path: pair.duplicate.to_string_lossy().into_owned(),
            original_path: pair.original.to_string_lossy().into_owned(),
        }
    }
}

/// Complete JSON report structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// Number of confirmed duplicate pairs
    pub duplicate_count: usize,
    /// The pairs, in report order
    pub pairs: Vec<JsonPair>,
}

impl JsonReport {
    /// Build the JSON view of a report.
    #[must_use]
    pub fn from_report(report: &Report) -> Self {
        Self {
            duplicate_count: report.duplicate_count(),
            pairs: report.iter().map(JsonPair::from_pair).collect(),
        }
    }
}

/// Render the report as pretty-printed JSON into `writer`.
///
/// # Errors
///
/// Propagates any write failure.
pub fn render(report: &Report, writer: &mut impl Write) -> io::Result<()> {
    let json = JsonReport::from_report(report);
    serde_json::to_writer_pretty(&mut *writer, &json).map_err(io::Error::from)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duplicates::{Resolver, ResolverConfig};
    use crate::scanner::FileCandidate;
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::TempDir;

    #[test]
    fn test_json_empty_report() {
        let mut out = Vec::new();
        render(&Report::default(), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["duplicate_count"], 0);
        assert!(value["pairs"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_report_schema() {
        let dir = TempDir::new().unwrap();
        let mut candidates = Vec::new();
        for name in ["a.txt", "b.txt"] {
            let path = dir.path().join(name);
            let mut f = File::create(&path).unwrap();
            f.write_all(b"hello").unwrap();
            candidates.push(FileCandidate::new(path, 5));
        }
        let report = Resolver::new(ResolverConfig::default()).resolve(candidates);

        let mut out = Vec::new();
        render(&report, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["duplicate_count"], 1);
        let pairs = value["pairs"].as_array().unwrap();
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0]["duplicate_path"]
            .as_str()
            .unwrap()
            .ends_with("b.txt"));
        assert!(pairs[0]["original_path"]
            .as_str()
            .unwrap()
            .ends_with("a.txt"));
    }
}
