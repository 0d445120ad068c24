//! Shared helpers: input pattern expansion and the PDF signature probe.

use std::path::PathBuf;

use crate::error::{PdfSpliceError, Result};

/// Leading bytes of every PDF file.
const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// Check whether a buffer starts with the PDF file signature.
///
/// This is a convention check only; real validation happens when the
/// underlying library parses the buffer.
pub fn has_pdf_signature(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_SIGNATURE)
}

/// Expand input arguments into concrete filesystem paths.
///
/// Each argument may be a glob pattern (`chapters/*.pdf`) or a literal path.
/// Patterns expand to their matches in sorted order; an argument that matches
/// nothing is kept as a literal path so that a later read reports a proper
/// file-not-found error for it.
///
/// # Errors
///
/// Propagates glob parse errors and filesystem errors from pattern expansion.
pub fn expand_input_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut paths = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();

        let entries = glob::glob(pattern).map_err(|err| PdfSpliceError::Other {
            message: format!("invalid pattern {pattern}: {err}"),
        })?;

        let mut matched = false;
        for entry in entries {
            let path = entry.map_err(|err| PdfSpliceError::Other {
                message: err.to_string(),
            })?;
            paths.push(path);
            matched = true;
        }

        if !matched {
            paths.push(PathBuf::from(pattern));
        }
    }

    Ok(paths)
}
