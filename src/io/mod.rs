//! File I/O for disk-facing merges.
//!
//! This module reads source files into buffers and writes merged buffers
//! back out:
//! - Sequential and order-preserving parallel reads
//! - Optional `%PDF-` signature verification before parsing
//! - Atomic writes with on-demand parent-directory creation

pub mod reader;
pub mod writer;

pub use reader::{ReadResult, ReadStatistics, SourceBuffer, SourceReader};
pub use writer::{OutputWriter, WriteOptions, WriteReport};

use crate::error::Result;
use std::path::Path;

/// Read a source file into a buffer.
///
/// Convenience function for a single signature-checked read.
///
/// # Errors
///
/// Returns an error if the file cannot be read or lacks a PDF signature.
pub async fn read_source(path: &Path) -> Result<SourceBuffer> {
    SourceReader::new().read(path).await
}

/// Write a merged buffer to a file.
///
/// Convenience function using default write options.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub async fn write_output(bytes: &[u8], path: &Path) -> Result<()> {
    OutputWriter::new().write(bytes, path).await
}
