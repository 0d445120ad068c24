//! Page appending: copy every page of one source buffer into a target document.
//!
//! This is the inner step of a merge. The appender parses a source buffer,
//! transplants its objects into the target document under fresh object ids,
//! and attaches the copied pages to the target's page tree in source order.

use lopdf::{Document, Object, ObjectId};

use crate::error::{PdfSpliceError, Result};

/// Pages added to the target by one append step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendedPages {
    /// Exact number of pages the source document carried at copy time.
    pub pages_added: usize,
}

/// Result of one append step (success or failure).
///
/// The appender reports failures as values instead of panicking, so the
/// caller decides whether a bad source aborts the run or is skipped.
pub type AppendResult = Result<AppendedPages>;

/// Appends all pages of a source buffer into a target document.
#[derive(Debug, Clone, Default)]
pub struct PageAppender;

impl PageAppender {
    /// Create a new page appender.
    pub fn new() -> Self {
        Self
    }

    /// Append every page of `source` to `target`, in source order.
    ///
    /// A structurally empty source succeeds with `pages_added == 0` and
    /// leaves the target untouched. A buffer that fails to parse is an
    /// error, even when it starts with a plausible `%PDF-` signature;
    /// the caller decides disposition. The source buffer itself is never
    /// mutated or retained.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::LoadFailed`] when the buffer cannot be
    /// parsed, or [`PdfSpliceError::CopyFailed`] when the target's page
    /// tree cannot accept the copied pages.
    pub fn append(&self, source: &[u8], target: &mut Document) -> AppendResult {
        let mut doc = Document::load_mem(source)
            .map_err(|e| PdfSpliceError::load_failed(e.to_string()))?;

        if doc.get_pages().is_empty() {
            return Ok(AppendedPages { pages_added: 0 });
        }

        // Rebind the source objects to ids that are free in the target,
        // then move them over wholesale.
        doc.renumber_objects_with(target.max_id + 1);
        target.max_id = doc.max_id;

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        target.objects.extend(doc.objects);

        self.attach_pages(target, &page_ids)?;

        Ok(AppendedPages {
            pages_added: page_ids.len(),
        })
    }

    /// Attach already-transplanted pages to the target's page tree.
    ///
    /// Pages are reparented onto the target's root Pages node, appended to
    /// its Kids array in the given order, and the page count is bumped.
    fn attach_pages(&self, target: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
        let pages_id = target
            .catalog()
            .map_err(|e| PdfSpliceError::copy_failed(format!("failed to get catalog: {e}")))?
            .get(b"Pages")
            .and_then(|p| p.as_reference())
            .map_err(|e| {
                PdfSpliceError::copy_failed(format!("failed to get pages reference: {e}"))
            })?;

        for &page_id in page_ids {
            match target.get_object_mut(page_id) {
                Ok(Object::Dictionary(dict)) => {
                    dict.set("Parent", Object::Reference(pages_id));
                }
                Ok(_) => {
                    return Err(PdfSpliceError::copy_failed("page object is not a dictionary"));
                }
                Err(e) => {
                    return Err(PdfSpliceError::copy_failed(format!(
                        "failed to get copied page: {e}"
                    )));
                }
            }
        }

        let pages_obj = target
            .get_object_mut(pages_id)
            .map_err(|e| PdfSpliceError::copy_failed(format!("failed to get pages object: {e}")))?;

        let Object::Dictionary(dict) = pages_obj else {
            return Err(PdfSpliceError::copy_failed("pages object is not a dictionary"));
        };

        match dict.get_mut(b"Kids") {
            Ok(Object::Array(kids)) => {
                for &page_id in page_ids {
                    kids.push(Object::Reference(page_id));
                }
            }
            Ok(_) => return Err(PdfSpliceError::copy_failed("Kids is not an array")),
            Err(_) => {
                return Err(PdfSpliceError::copy_failed(
                    "pages dictionary missing Kids array",
                ));
            }
        }

        let count = dict.get(b"Count").and_then(|c| c.as_i64()).unwrap_or(0);
        dict.set("Count", Object::Integer(count + page_ids.len() as i64));

        Ok(())
    }
}
