//! PDF merging operations.
//!
//! This module provides the merge core and its disk-facing wrappers:
//! - Buffer merging with fail-fast semantics and order preservation
//! - Page appending as a separately usable step
//! - Strict and best-effort batch operations over files
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplice::merge::merge_buffers;
//!
//! # fn example(a: Vec<u8>, b: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let merged = merge_buffers(&[a, b])?;
//! println!("merged document is {} bytes", merged.len());
//! # Ok(())
//! # }
//! ```

pub mod appender;
pub mod disk;
pub mod merger;

pub use appender::{AppendResult, AppendedPages, PageAppender};
pub use disk::{BatchReport, DiskMerger, FailedSource, MergeReport};
pub use merger::{MergeOutcome, MergeStatistics, Merger};

use crate::error::Result;

/// Merge source buffers into a single serialized document.
///
/// Convenience function that creates a merger and performs the merge.
///
/// # Errors
///
/// Returns an error if any merge step fails.
pub fn merge_buffers<B: AsRef<[u8]>>(sources: &[B]) -> Result<Vec<u8>> {
    Merger::new().merge(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_buffers_empty_input() {
        let sources: Vec<Vec<u8>> = Vec::new();
        let merged = merge_buffers(&sources).unwrap();
        assert!(!merged.is_empty());
    }

    #[test]
    fn test_merger_creation() {
        let _merger = Merger::new();
        let _appender = PageAppender::new();
        let _disk = DiskMerger::new();
    }
}
