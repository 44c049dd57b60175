//! Scanner module for directory traversal and candidate collection.
//!
//! The scanner is the first of the two detection phases: it walks a
//! directory (optionally recursively) and yields the path and size of every
//! regular file it encounters. The resolver in [`crate::duplicates`] consumes
//! the full candidate list afterwards.
//!
//! # Example
//!
//! ```no_run
//! use dupefinder::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."), false);
//! for candidate in walker.collect().unwrap() {
//!     println!("{}: {} bytes", candidate.path.display(), candidate.size);
//! }
//! ```

pub mod walker;

use std::path::PathBuf;

pub use walker::Walker;

/// A regular file discovered during traversal.
///
/// Immutable once discovered; owned by the collector until handed to the
/// resolver. Zero-length files are valid candidates (two empty files are
/// byte-for-byte equal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    /// Path to the file
    pub path: PathBuf,
    /// File size in bytes, read from metadata at enumeration time
    pub size: u64,
}

impl FileCandidate {
    /// Create a new candidate.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

/// Errors that fail a whole detection run.
///
/// These cover the scan root only. Errors on individual entries during
/// traversal are recovered locally and never surfaced.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The scan root was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The scan root is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The scan root could not be opened for listing.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_candidate_new() {
        let candidate = FileCandidate::new(PathBuf::from("/test/file.txt"), 1024);

        assert_eq!(candidate.path, PathBuf::from("/test/file.txt"));
        assert_eq!(candidate.size, 1024);
    }

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::NotFound(PathBuf::from("/missing"));
        assert_eq!(err.to_string(), "Path not found: /missing");

        let err = ScanError::NotADirectory(PathBuf::from("/file.txt"));
        assert_eq!(err.to_string(), "Not a directory: /file.txt");
    }
}
