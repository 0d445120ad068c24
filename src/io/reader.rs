//! Reading source files into PDF buffers.
//!
//! The disk-facing merge operations work on byte buffers, so the reader's
//! only job is getting file contents into memory with useful errors and,
//! optionally, a cheap `%PDF-` signature check before any parsing happens.
//! Batch reads preserve input order even when running in parallel.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfSpliceError, Result};
use crate::utils::has_pdf_signature;

/// One source file read into memory.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    /// Path to the source file.
    pub path: PathBuf,

    /// The file contents.
    pub bytes: Vec<u8>,

    /// Time taken to read the file.
    pub read_time: Duration,
}

impl SourceBuffer {
    /// Size of the buffer in bytes.
    pub fn file_size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl AsRef<[u8]> for SourceBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Result of a read operation (success or failure).
pub type ReadResult = Result<SourceBuffer>;

/// Statistics for a batch read operation.
#[derive(Debug, Clone)]
pub struct ReadStatistics {
    /// Number of files successfully read.
    pub success_count: usize,

    /// Number of files that failed to read.
    pub failure_count: usize,

    /// Total time taken for the batch.
    pub total_time: Duration,

    /// Total size of successfully read files.
    pub total_size: u64,
}

impl ReadStatistics {
    fn from_results(results: &[ReadResult], total_time: Duration) -> Self {
        let mut success_count = 0;
        let mut failure_count = 0;
        let mut total_size = 0;

        for result in results {
            match result {
                Ok(buffer) => {
                    success_count += 1;
                    total_size += buffer.file_size();
                }
                Err(_) => {
                    failure_count += 1;
                }
            }
        }

        Self {
            success_count,
            failure_count,
            total_time,
            total_size,
        }
    }
}

/// Reads source files into buffers.
#[derive(Debug, Clone)]
pub struct SourceReader {
    /// Whether to reject files without a `%PDF-` signature before parsing.
    verify_signature: bool,
}

impl SourceReader {
    /// Create a reader that checks the PDF signature of every file.
    pub fn new() -> Self {
        Self {
            verify_signature: true,
        }
    }

    /// Create a reader that skips the signature check.
    ///
    /// The underlying parser still rejects non-PDF content at load time;
    /// this only defers the rejection.
    pub fn without_verification() -> Self {
        Self {
            verify_signature: false,
        }
    }

    /// Read a single source file into a buffer.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::FileNotFound`] for a missing file,
    /// [`PdfSpliceError::FileNotAccessible`] for other read failures, and
    /// [`PdfSpliceError::NotAPdf`] when signature verification is on and
    /// the file does not start with `%PDF-`.
    pub async fn read(&self, path: &Path) -> ReadResult {
        let start = Instant::now();

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                PdfSpliceError::file_not_found(path.to_path_buf())
            } else {
                PdfSpliceError::FileNotAccessible {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        if self.verify_signature && !has_pdf_signature(&bytes) {
            return Err(PdfSpliceError::not_a_pdf(path.to_path_buf()));
        }

        Ok(SourceBuffer {
            path: path.to_path_buf(),
            bytes,
            read_time: start.elapsed(),
        })
    }

    /// Read multiple files one at a time, in the order provided.
    pub async fn read_sequential(&self, paths: &[PathBuf]) -> Vec<ReadResult> {
        let mut results = Vec::with_capacity(paths.len());

        for path in paths {
            results.push(self.read(path).await);
        }

        results
    }

    /// Read multiple files concurrently with a bounded number of workers.
    ///
    /// Results come back in input order regardless of completion order, so
    /// callers can zip them against the input paths.
    pub async fn read_parallel(&self, paths: &[PathBuf], workers: usize) -> Vec<ReadResult> {
        use futures::stream::{self, StreamExt};

        let workers = workers.max(1);

        let tasks = paths.iter().enumerate().map(|(idx, path)| {
            let path = path.clone();
            let reader = self.clone();
            async move { (idx, reader.read(&path).await) }
        });

        let mut indexed: Vec<(usize, ReadResult)> = stream::iter(tasks)
            .buffer_unordered(workers)
            .collect::<Vec<_>>()
            .await;

        indexed.sort_by_key(|(idx, _)| *idx);
        indexed.into_iter().map(|(_, result)| result).collect()
    }

    /// Read all files, choosing sequential or parallel mode by batch size.
    ///
    /// Returns the per-file results in input order plus aggregate statistics.
    pub async fn read_all(
        &self,
        paths: &[PathBuf],
        max_workers: usize,
    ) -> (Vec<ReadResult>, ReadStatistics) {
        let start = Instant::now();

        // Sequential for small batches to skip the scheduling overhead.
        let results = if paths.len() <= 3 {
            self.read_sequential(paths).await
        } else {
            self.read_parallel(paths, max_workers).await
        };

        let stats = ReadStatistics::from_results(&results, start.elapsed());
        (results, stats)
    }
}

impl Default for SourceReader {
    fn default() -> Self {
        Self::new()
    }
}
