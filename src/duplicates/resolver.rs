//! Duplicate resolution over size buckets.
//!
//! # Overview
//!
//! The resolver consumes the full candidate list, buckets it by size, and
//! confirms duplicates by byte comparison. Within a bucket, only **adjacent**
//! members are compared: a bucket `[x, y, z]` produces the comparisons
//! (x,y) and (y,z), never (x,z). When x = y and y = z the report therefore
//! records two pairs, and z is flagged as a duplicate of y rather than of x;
//! the whole chain is still transitively flagged. This neighbor-chain policy
//! is deliberate and load-bearing for the report format.
//!
//! Bucket construction is sequential, but finished buckets are fully
//! independent, so comparisons run on a rayon worker pool. Each worker owns
//! its own pair of file handles and produces its bucket's pairs in chain
//! order; collecting the per-bucket results in bucket order keeps the final
//! report deterministic (ascending size, chain order within each size).
//!
//! # Example
//!
//! ```no_run
//! use dupefinder::duplicates::{Resolver, ResolverConfig};
//! use dupefinder::scanner::Walker;
//! use std::path::Path;
//!
//! let candidates = Walker::new(Path::new("."), true).collect().unwrap();
//! let report = Resolver::new(ResolverConfig::default()).resolve(candidates);
//! println!("{} duplicates found", report.duplicate_count());
//! ```

use std::path::PathBuf;

use rayon::prelude::*;

use super::buckets::bucket_by_size;
use super::compare::files_identical;
use crate::scanner::FileCandidate;

/// Configuration for the resolution phase.
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Number of worker threads for bucket comparisons.
    /// `None` uses rayon's default (one per logical CPU).
    pub threads: Option<usize>,
}

impl ResolverConfig {
    /// Create a configuration with a custom worker thread count.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads.max(1));
        self
    }
}

/// Two files confirmed byte-for-byte equal.
///
/// The later-in-bucket-order file is described as the duplicate of the
/// earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePair {
    /// The file reported as a duplicate
    pub duplicate: PathBuf,
    /// The file it duplicates
    pub original: PathBuf,
}

impl std::fmt::Display for DuplicatePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is a duplicate of {}",
            self.duplicate.display(),
            self.original.display()
        )
    }
}

/// The outcome of one detection run.
///
/// Rebuilt from scratch on every run; read-only for callers. Pairs appear in
/// ascending bucket-size order, chain order within a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pairs: Vec<DuplicatePair>,
}

impl Report {
    /// Number of confirmed duplicate pairs.
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.pairs.len()
    }

    /// Check whether any duplicates were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The confirmed pairs, in report order.
    #[must_use]
    pub fn pairs(&self) -> &[DuplicatePair] {
        &self.pairs
    }

    /// Iterate over the confirmed pairs.
    pub fn iter(&self) -> impl Iterator<Item = &DuplicatePair> {
        self.pairs.iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a DuplicatePair;
    type IntoIter = std::slice::Iter<'a, DuplicatePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Confirms duplicates among size-bucketed candidates.
#[derive(Debug, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver with the given configuration.
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Resolve the candidate list into a duplicate report.
    ///
    /// Never fails: an I/O error while opening or reading a file resolves
    /// that one comparison as "not a duplicate" and the run continues. No
    /// retries; a failed comparison stays failed for this run.
    #[must_use]
    pub fn resolve(&self, candidates: Vec<FileCandidate>) -> Report {
        let (buckets, stats) = bucket_by_size(candidates);

        // Only buckets with 2+ members can contain duplicates. Materialize
        // them in ascending size order so the parallel map below preserves
        // report ordering.
        let work: Vec<Vec<FileCandidate>> = buckets
            .into_values()
            .filter(|members| members.len() > 1)
            .collect();

        if work.is_empty() {
            log::debug!("No size bucket holds more than one file; nothing to compare");
            return Report::default();
        }

        log::debug!(
            "Comparing {} candidate(s) across {} bucket(s)",
            stats.potential_duplicates,
            work.len()
        );

        let pairs = match self.build_pool() {
            Some(pool) => pool.install(|| Self::compare_buckets(&work)),
            None => Self::compare_buckets(&work),
        };

        Report { pairs }
    }

    /// Run the neighbor-chain comparison for every bucket in parallel.
    ///
    /// The indexed `par_iter().map().collect()` yields per-bucket results in
    /// bucket order; flattening afterwards keeps the report deterministic.
    fn compare_buckets(work: &[Vec<FileCandidate>]) -> Vec<DuplicatePair> {
        let per_bucket: Vec<Vec<DuplicatePair>> = work
            .par_iter()
            .map(|members| Self::compare_bucket(members))
            .collect();
        per_bucket.into_iter().flatten().collect()
    }

    /// Compare adjacent members of one bucket.
    fn compare_bucket(members: &[FileCandidate]) -> Vec<DuplicatePair> {
        let mut pairs = Vec::new();
        for window in members.windows(2) {
            let (earlier, later) = (&window[0], &window[1]);
            match files_identical(&earlier.path, &later.path) {
                Ok(true) => {
                    log::trace!(
                        "{} is a duplicate of {}",
                        later.path.display(),
                        earlier.path.display()
                    );
                    pairs.push(DuplicatePair {
                        duplicate: later.path.clone(),
                        original: earlier.path.clone(),
                    });
                }
                Ok(false) => {
                    log::trace!(
                        "{} differs from {}",
                        later.path.display(),
                        earlier.path.display()
                    );
                }
                Err(e) => {
                    // A failed open or read resolves this pair as not
                    // duplicate; the run continues.
                    log::warn!(
                        "Skipping comparison of {} and {}: {}",
                        earlier.path.display(),
                        later.path.display(),
                        e
                    );
                }
            }
        }
        pairs
    }

    /// Build the custom worker pool, if a thread count was configured.
    fn build_pool(&self) -> Option<rayon::ThreadPool> {
        let threads = self.config.threads?;
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => Some(pool),
            Err(e) => {
                log::warn!(
                    "Failed to create worker pool with {} thread(s), using global pool: {}",
                    threads,
                    e
                );
                None
            }
        }
    }
}
