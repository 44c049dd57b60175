//! Duplicate detection module.
//!
//! This module implements the resolution phase of the pipeline:
//! - Size bucketing (phase 1): group candidates by exact size
//! - Byte comparison (phase 2): confirm duplicates by reading file content
//!
//! Files with different sizes cannot be duplicates, so bucketing eliminates
//! most candidates before any file content is read.

pub mod buckets;
pub mod compare;
pub mod resolver;

pub use buckets::{bucket_by_size, BucketStats, SizeBuckets};
pub use compare::files_identical;
pub use resolver::{DuplicatePair, Report, Resolver, ResolverConfig};
