//! Size-based candidate bucketing.
//!
//! # Overview
//!
//! Bucketing is the first phase of duplicate resolution. Every candidate is
//! inserted into an ordered multi-valued map keyed by file size; only buckets
//! holding two or more candidates go on to the comparison phase, since files
//! of different sizes cannot be byte-for-byte equal.
//!
//! Within a bucket, candidates keep the order in which the collector
//! discovered them. The comparison phase relies on that order for its
//! neighbor-pairing policy.
//!
//! # Example
//!
//! ```
//! use dupefinder::duplicates::bucket_by_size;
//! use dupefinder::scanner::FileCandidate;
//! use std::path::PathBuf;
//!
//! let candidates = vec![
//!     FileCandidate::new(PathBuf::from("/file1.txt"), 1024),
//!     FileCandidate::new(PathBuf::from("/file2.txt"), 1024),
//!     FileCandidate::new(PathBuf::from("/file3.txt"), 2048),
//! ];
//!
//! let (buckets, stats) = bucket_by_size(candidates);
//!
//! assert_eq!(stats.total_files, 3);
//! assert_eq!(stats.potential_duplicates, 2); // the two 1024-byte files
//! assert_eq!(buckets.len(), 2);
//! ```

use std::collections::BTreeMap;

use crate::scanner::FileCandidate;

/// Candidates grouped by size, ordered by ascending size.
///
/// The union of all bucket contents equals the full candidate set; no
/// candidate appears in more than one bucket.
pub type SizeBuckets = BTreeMap<u64, Vec<FileCandidate>>;

/// Statistics from the bucketing phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketStats {
    /// Total candidates that entered bucketing
    pub total_files: usize,
    /// Candidates sitting in buckets of 2+ (still possibly duplicates)
    pub potential_duplicates: usize,
    /// Number of distinct sizes seen
    pub bucket_count: usize,
}

impl BucketStats {
    /// Percentage of candidates eliminated without reading any content.
    #[must_use]
    pub fn elimination_rate(&self) -> f64 {
        if self.total_files == 0 {
            0.0
        } else {
            let eliminated = self.total_files - self.potential_duplicates;
            (eliminated as f64 / self.total_files as f64) * 100.0
        }
    }
}

/// Group candidates by exact file size (phase 1).
///
/// O(n log n) insertion into an ordered map. Candidates of equal size stay in
/// insertion order within their bucket.
#[must_use]
pub fn bucket_by_size(candidates: Vec<FileCandidate>) -> (SizeBuckets, BucketStats) {
    let mut stats = BucketStats {
        total_files: candidates.len(),
        ..Default::default()
    };

    let mut buckets: SizeBuckets = BTreeMap::new();
    for candidate in candidates {
        buckets.entry(candidate.size).or_default().push(candidate);
    }

    stats.bucket_count = buckets.len();
    stats.potential_duplicates = buckets
        .values()
        .filter(|members| members.len() > 1)
        .map(Vec::len)
        .sum();

    log::debug!(
        "Bucketed {} file(s) into {} size bucket(s), {} potential duplicate(s) ({:.1}% eliminated)",
        stats.total_files,
        stats.bucket_count,
        stats.potential_duplicates,
        stats.elimination_rate()
    );

    (buckets, stats)
}
