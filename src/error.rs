//! Error types for pdfsplice.
//!
//! This module defines all error types that can occur during merge and append
//! operations. Errors carry enough context to be actionable and map to stable
//! process exit codes.
//!
//! # Error Categories
//!
//! - **Core errors**: source load, page copy, and serialization failures
//! - **I/O errors**: missing files, permission problems, write failures
//! - **Policy errors**: sandbox violations, overwrite refusals, bad config
//!
//! The merge entry points wrap any underlying failure into [`PdfSpliceError::MergeFailed`],
//! whose message always starts with the stable prefix `failed to merge PDFs`
//! so callers can pattern-match on it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for pdfsplice operations.
pub type Result<T> = std::result::Result<T, PdfSpliceError>;

/// Main error type for pdfsplice operations.
#[derive(Debug, Error)]
pub enum PdfSpliceError {
    /// A merge run failed. Wraps the first error encountered; nothing was
    /// serialized and no partial output exists.
    #[error("failed to merge PDFs: {reason}")]
    MergeFailed {
        /// Message of the underlying failure (never empty).
        reason: String,
        /// The error that aborted the merge, when one was captured.
        #[source]
        source: Option<Box<PdfSpliceError>>,
    },

    /// A source buffer could not be parsed as a PDF document.
    #[error("failed to load source document: {reason}")]
    LoadFailed {
        /// Parser message from the underlying library.
        reason: String,
    },

    /// Pages could not be copied into the target document.
    #[error("failed to copy pages into target document: {reason}")]
    CopyFailed {
        /// Details about the page-tree operation that failed.
        reason: String,
    },

    /// The accumulated target document could not be serialized.
    #[error("failed to serialize merged document: {reason}")]
    SerializeFailed {
        /// Serializer message from the underlying library.
        reason: String,
    },

    /// Input file was not found.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input file exists but could not be read.
    #[error("cannot access file: {} ({source})", path.display())]
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Input file does not carry a PDF signature.
    #[error("not a PDF file: {}", path.display())]
    NotAPdf {
        /// Path to the rejected file.
        path: PathBuf,
    },

    /// Every source in a best-effort batch failed; no output was written.
    #[error("no sources could be merged")]
    NoSourcesMerged,

    /// Output file already exists and overwriting is not allowed.
    #[error("output file already exists: {} (use --force to overwrite)", path.display())]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Output path escapes the configured base directory.
    #[error(
        "output path {} is outside the base directory {} (use --allow-outside-base to permit this)",
        path.display(),
        base.display()
    )]
    OutputOutsideBase {
        /// The resolved output path.
        path: PathBuf,
        /// The configured base directory.
        base: PathBuf,
    },

    /// Failed to create the output file or its parent directories.
    #[error("failed to create output at {}: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the output file.
    #[error("failed to write output to {}: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid configuration or option combination.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what is wrong.
        message: String,
    },

    /// User cancelled the operation.
    #[error("operation cancelled by user")]
    Cancelled,

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<anyhow::Error> for PdfSpliceError {
    fn from(err: anyhow::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl PdfSpliceError {
    /// Wrap an underlying error into a merge failure.
    ///
    /// The wrapped message keeps the `failed to merge PDFs` prefix stable and
    /// substitutes a generic reason when the underlying message is empty.
    pub fn merge_failed_from(err: PdfSpliceError) -> Self {
        let mut reason = err.to_string();
        if reason.trim().is_empty() {
            reason = "unknown error".to_string();
        }
        Self::MergeFailed {
            reason,
            source: Some(Box::new(err)),
        }
    }

    /// Create a MergeFailed error from a plain message.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a LoadFailed error.
    pub fn load_failed(reason: impl Into<String>) -> Self {
        Self::LoadFailed {
            reason: reason.into(),
        }
    }

    /// Create a CopyFailed error.
    pub fn copy_failed(reason: impl Into<String>) -> Self {
        Self::CopyFailed {
            reason: reason.into(),
        }
    }

    /// Create a SerializeFailed error.
    pub fn serialize_failed(reason: impl Into<String>) -> Self {
        Self::SerializeFailed {
            reason: reason.into(),
        }
    }

    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAPdf error.
    pub fn not_a_pdf(path: PathBuf) -> Self {
        Self::NotAPdf { path }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Check if this error affects only a single source document.
    ///
    /// Per-source errors are skippable in best-effort mode; everything else
    /// aborts the batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::LoadFailed { .. }
                | Self::CopyFailed { .. }
                | Self::FileNotFound { .. }
                | Self::FileNotAccessible { .. }
                | Self::NotAPdf { .. }
        )
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => 2,
            Self::FileNotAccessible { .. } => 2,
            Self::NotAPdf { .. } => 3,
            Self::LoadFailed { .. } => 3,
            Self::CopyFailed { .. } => 6,
            Self::SerializeFailed { .. } => 6,
            Self::MergeFailed { .. } => 6,
            Self::NoSourcesMerged => 1,
            Self::OutputExists { .. } => 4,
            Self::OutputOutsideBase { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::InvalidConfig { .. } => 1,
            Self::Cancelled => 130, // Standard exit code for SIGINT
            Self::Io { .. } => 5,
            Self::Other { .. } => 1,
        }
    }
}
