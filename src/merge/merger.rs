//! Core buffer merging implementation.
//!
//! The merger owns a fresh target document for the duration of one call,
//! feeds every source buffer through the page appender in order, and
//! serializes the accumulated document back to bytes. The first failing
//! source aborts the whole run; no partial output is ever produced.

use std::time::{Duration, Instant};

use lopdf::{Document, dictionary};

use crate::error::{PdfSpliceError, Result};
use crate::merge::appender::PageAppender;

/// Statistics about a merge operation.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Number of source buffers merged.
    pub sources_merged: usize,

    /// Total number of pages in the merged document.
    pub total_pages: usize,

    /// Total time taken for the merge, including serialization.
    pub merge_time: Duration,

    /// Size of the serialized output in bytes.
    pub output_size: u64,
}

/// Result of a successful merge: the serialized document plus statistics.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// The merged document, serialized.
    pub bytes: Vec<u8>,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,
}

/// Merges a sequence of PDF buffers into one document.
///
/// A merger holds no per-call state; one instance can serve any number of
/// sequential or concurrent merge calls. Each call owns its target document
/// exclusively and drops it after serialization.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    appender: PageAppender,
}

impl Merger {
    /// Create a new merger.
    pub fn new() -> Self {
        Self {
            appender: PageAppender::new(),
        }
    }

    /// Merge source buffers, in order, into a single serialized document.
    ///
    /// Zero sources yield a structurally valid document with zero content
    /// pages. On any failure the run aborts: remaining sources are not
    /// processed, nothing is serialized, and the returned error wraps the
    /// cause under the stable `failed to merge PDFs` prefix.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfsplice::merge::Merger;
    /// # fn example(a: Vec<u8>, b: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
    /// let merger = Merger::new();
    /// let merged = merger.merge(&[a, b])?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::MergeFailed`] wrapping the first load,
    /// copy, or serialization failure.
    pub fn merge<B: AsRef<[u8]>>(&self, sources: &[B]) -> Result<Vec<u8>> {
        Ok(self.merge_with_stats(sources)?.bytes)
    }

    /// Merge source buffers and report statistics about the run.
    pub fn merge_with_stats<B: AsRef<[u8]>>(&self, sources: &[B]) -> Result<MergeOutcome> {
        let merge_start = Instant::now();

        let mut target = new_target_document();
        let mut sources_merged = 0;
        let mut total_pages = 0;

        for source in sources {
            match self.appender.append(source.as_ref(), &mut target) {
                Ok(added) => {
                    sources_merged += 1;
                    total_pages += added.pages_added;
                }
                Err(e) => return Err(PdfSpliceError::merge_failed_from(e)),
            }
        }

        let bytes =
            serialize_document(&mut target).map_err(PdfSpliceError::merge_failed_from)?;

        let statistics = MergeStatistics {
            sources_merged,
            total_pages,
            merge_time: merge_start.elapsed(),
            output_size: bytes.len() as u64,
        };

        Ok(MergeOutcome { bytes, statistics })
    }
}

/// Create a fresh, empty target document: a catalog over an empty page tree.
pub(crate) fn new_target_document() -> Document {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => Vec::<lopdf::Object>::new(),
        "Count" => 0,
    };
    doc.objects.insert(pages_id, pages.into());

    let catalog_id = doc.new_object_id();
    let catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    doc.objects.insert(catalog_id, catalog.into());
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Serialize an accumulated target document to bytes.
pub(crate) fn serialize_document(doc: &mut Document) -> Result<Vec<u8>> {
    doc.compress();
    doc.renumber_objects();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| PdfSpliceError::serialize_failed(e.to_string()))?;

    Ok(bytes)
}
