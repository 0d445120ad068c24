//! pdfsplice - Merge and append PDF documents in memory or on disk.
//!
//! This library merges PDF byte buffers into a single document, delegating
//! all parsing and serialization to `lopdf`. It provides:
//!
//! - In-memory buffer merging with fail-fast semantics
//! - Page appending as a separately usable step
//! - Strict and best-effort batch operations over files
//! - Base-directory sandboxing for output paths
//!
//! # Examples
//!
//! ## Merging buffers
//!
//! ```no_run
//! use pdfsplice::merge::Merger;
//!
//! # fn example(first: Vec<u8>, second: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let merger = Merger::new();
//! let merged = merger.merge(&[first, second])?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Merging files
//!
//! ```no_run
//! use pdfsplice::config::DiskOptions;
//! use pdfsplice::merge::DiskMerger;
//! use std::path::{Path, PathBuf};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = DiskOptions::with_base_dir("/data/out");
//! let merger = DiskMerger::new();
//! let report = merger
//!     .merge_strict(
//!         &[PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!         Path::new("merged.pdf"),
//!         &options,
//!     )
//!     .await?;
//! println!("wrote {} pages to {}", report.total_pages, report.output.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use config::DiskOptions;
pub use error::{PdfSpliceError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
