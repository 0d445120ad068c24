//! Disk-facing merge operations.
//!
//! Two named operations wrap the buffer core for file inputs:
//!
//! - [`DiskMerger::merge_strict`] reads every input, merges fail-fast, and
//!   aborts the whole batch on the first bad source.
//! - [`DiskMerger::merge_best_effort`] skips bad sources, merges the rest,
//!   and reports the skipped files in the batch summary.
//!
//! Output paths resolve through the caller's [`DiskOptions`], which owns the
//! base-directory sandbox, overwrite policy, and directory-creation policy.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{DiskOptions, OverwriteMode};
use crate::error::{PdfSpliceError, Result};
use crate::io::reader::SourceReader;
use crate::io::writer::{OutputWriter, WriteOptions};
use crate::merge::appender::PageAppender;
use crate::merge::merger::{Merger, new_target_document, serialize_document};

/// Summary of a strict disk merge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeReport {
    /// Resolved path the output was written to.
    pub output: PathBuf,

    /// Source files merged, in merge order.
    pub merged: Vec<PathBuf>,

    /// Total pages in the output document.
    pub total_pages: usize,

    /// Size of the output file in bytes.
    pub output_size: u64,
}

/// One source that a best-effort batch skipped.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedSource {
    /// Path to the skipped file.
    pub path: PathBuf,

    /// Why it was skipped.
    pub reason: String,
}

/// Summary of a best-effort disk merge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// Resolved path the output was written to.
    pub output: PathBuf,

    /// Source files that made it into the output, in merge order.
    pub merged: Vec<PathBuf>,

    /// Source files that were skipped, with reasons.
    pub failed: Vec<FailedSource>,

    /// Total pages in the output document.
    pub total_pages: usize,

    /// Size of the output file in bytes.
    pub output_size: u64,
}

/// Merges PDF files from disk into a single output file.
pub struct DiskMerger {
    reader: SourceReader,
    merger: Merger,
    appender: PageAppender,
}

impl DiskMerger {
    /// Create a disk merger with signature-checked reads.
    pub fn new() -> Self {
        Self {
            reader: SourceReader::new(),
            merger: Merger::new(),
            appender: PageAppender::new(),
        }
    }

    /// Create a disk merger that skips the `%PDF-` signature check on reads.
    pub fn without_signature_check() -> Self {
        Self {
            reader: SourceReader::without_verification(),
            ..Self::new()
        }
    }

    /// Merge input files fail-fast and write the result.
    ///
    /// Every input must read and parse; the first failure aborts the batch
    /// with a merge error and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns a sandbox or overwrite error before any reading starts, a
    /// [`PdfSpliceError::MergeFailed`] wrapping the first read/parse
    /// failure, or a write error if the output cannot be created.
    pub async fn merge_strict(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        options: &DiskOptions,
    ) -> Result<MergeReport> {
        let resolved = self.prepare_output(output, options).await?;

        let (results, _stats) = self.reader.read_all(inputs, options.effective_jobs()).await;

        let mut buffers = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(buffer) => buffers.push(buffer),
                Err(e) => return Err(PdfSpliceError::merge_failed_from(e)),
            }
        }

        let outcome = self.merger.merge_with_stats(&buffers)?;

        let report = self
            .write_output(&outcome.bytes, &resolved, options)
            .await?;

        Ok(MergeReport {
            output: report.output_path,
            merged: buffers.into_iter().map(|b| b.path).collect(),
            total_pages: outcome.statistics.total_pages,
            output_size: report.file_size,
        })
    }

    /// Merge input files, skipping the ones that fail, and write the result.
    ///
    /// Sources are read and appended one at a time so a bad file costs
    /// nothing but its own pages. Skipped sources are listed in the report.
    /// Zero inputs write a valid zero-page document.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::NoSourcesMerged`] when inputs were supplied
    /// but every one of them failed, plus the same sandbox, serialization,
    /// and write errors as the strict mode.
    pub async fn merge_best_effort(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        options: &DiskOptions,
    ) -> Result<BatchReport> {
        let resolved = self.prepare_output(output, options).await?;

        let mut target = new_target_document();
        let mut merged = Vec::new();
        let mut failed = Vec::new();
        let mut total_pages = 0;

        for path in inputs {
            let appended = match self.reader.read(path).await {
                Ok(buffer) => self.appender.append(buffer.as_ref(), &mut target),
                Err(e) => Err(e),
            };

            match appended {
                Ok(added) => {
                    total_pages += added.pages_added;
                    merged.push(path.clone());
                }
                Err(e) if e.is_recoverable() => {
                    failed.push(FailedSource {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        if merged.is_empty() && !inputs.is_empty() {
            return Err(PdfSpliceError::NoSourcesMerged);
        }

        let bytes = serialize_document(&mut target).map_err(PdfSpliceError::merge_failed_from)?;

        let report = self.write_output(&bytes, &resolved, options).await?;

        Ok(BatchReport {
            output: report.output_path,
            merged,
            failed,
            total_pages,
            output_size: report.file_size,
        })
    }

    /// Resolve the output path and enforce the overwrite policy.
    ///
    /// Prompting is the caller's job; the library only hard-refuses in
    /// no-clobber mode.
    async fn prepare_output(&self, output: &Path, options: &DiskOptions) -> Result<PathBuf> {
        let resolved = options.resolve_output(output)?;

        if options.overwrite_mode == OverwriteMode::NoClobber {
            let writer = OutputWriter::new();
            if writer.exists(&resolved).await {
                return Err(PdfSpliceError::output_exists(resolved));
            }
        }

        Ok(resolved)
    }

    async fn write_output(
        &self,
        bytes: &[u8],
        resolved: &Path,
        options: &DiskOptions,
    ) -> Result<crate::io::writer::WriteReport> {
        let writer = OutputWriter::with_options(WriteOptions {
            create_dirs: options.create_dirs,
            ..Default::default()
        });
        writer.write_with_stats(bytes, resolved).await
    }
}

impl Default for DiskMerger {
    fn default() -> Self {
        Self::new()
    }
}
