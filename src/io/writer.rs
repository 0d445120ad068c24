//! Writing merged output buffers to disk.
//!
//! Writes are atomic by default: the buffer lands in a temporary sibling
//! file that is renamed over the final path, so readers never observe a
//! half-written document. Missing parent directories can be created on
//! demand for nested output paths.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfSpliceError, Result};

/// Options for writing output files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Create missing parent directories before writing.
    pub create_dirs: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            create_dirs: true,
        }
    }
}

/// Statistics about a completed write.
#[derive(Debug, Clone)]
pub struct WriteReport {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Number of bytes written.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

/// Writes output buffers to disk.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    options: WriteOptions,
}

impl OutputWriter {
    /// Create a writer with default options.
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer without atomic writes.
    pub fn non_atomic() -> Self {
        Self {
            options: WriteOptions {
                atomic: false,
                ..Default::default()
            },
        }
    }

    /// Write a buffer to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::FailedToCreateOutput`] when parent
    /// directories cannot be created, or [`PdfSpliceError::FailedToWrite`]
    /// when the write or the final rename fails.
    pub async fn write(&self, bytes: &[u8], path: &Path) -> Result<()> {
        let _report = self.write_with_stats(bytes, path).await?;
        Ok(())
    }

    /// Write a buffer and report statistics about the operation.
    pub async fn write_with_stats(&self, bytes: &[u8], path: &Path) -> Result<WriteReport> {
        let start = Instant::now();

        if self.options.create_dirs {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    PdfSpliceError::FailedToCreateOutput {
                        path: parent.to_path_buf(),
                        source: e,
                    }
                })?;
            }
        }

        let write_path = if self.options.atomic {
            path.with_extension("tmp")
        } else {
            path.to_path_buf()
        };

        tokio::fs::write(&write_path, bytes)
            .await
            .map_err(|e| PdfSpliceError::FailedToWrite {
                path: write_path.clone(),
                source: e,
            })?;

        if self.options.atomic {
            tokio::fs::rename(&write_path, path).await.map_err(|e| {
                PdfSpliceError::FailedToWrite {
                    path: path.to_path_buf(),
                    source: e,
                }
            })?;
        }

        Ok(WriteReport {
            write_time: start.elapsed(),
            file_size: bytes.len() as u64,
            output_path: path.to_path_buf(),
        })
    }

    /// Check if the output path already exists.
    pub async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    /// Remove an output file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub async fn remove_if_exists(&self, path: &Path) -> Result<()> {
        if self.exists(path).await {
            tokio::fs::remove_file(path)
                .await
                .map_err(|e| PdfSpliceError::FailedToWrite {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new()
    }
}
