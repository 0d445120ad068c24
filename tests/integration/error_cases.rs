//! Integration tests for error handling and edge cases.

use std::path::{Path, PathBuf};

use pdfsplice::config::{DiskOptions, OverwriteMode};
use pdfsplice::error::PdfSpliceError;
use pdfsplice::merge::{DiskMerger, merge_buffers};
use tempfile::TempDir;

use crate::common::{pdf_with_pages, write_pdf};

#[test]
fn test_merge_error_has_stable_prefix_and_cause() {
    let sources = vec![pdf_with_pages(1), b"broken".to_vec()];

    let err = merge_buffers(&sources).unwrap_err();
    let msg = err.to_string();

    assert!(msg.starts_with("failed to merge PDFs"));
    assert!(msg.len() > "failed to merge PDFs: ".len());
}

#[test]
fn test_failed_merge_returns_no_partial_output() {
    // The result type makes partial output impossible; assert the error
    // side carries no buffer and the call is Err, not a truncated Ok.
    let sources = vec![pdf_with_pages(2), b"broken".to_vec(), pdf_with_pages(2)];

    assert!(merge_buffers(&sources).is_err());
}

#[tokio::test]
async fn test_strict_merge_with_missing_input() {
    let temp_dir = TempDir::new().unwrap();

    let options = DiskOptions {
        overwrite_mode: OverwriteMode::Force,
        ..DiskOptions::with_base_dir(temp_dir.path())
    };

    let err = DiskMerger::new()
        .merge_strict(
            &[PathBuf::from("/nonexistent/input.pdf")],
            Path::new("out.pdf"),
            &options,
        )
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("failed to merge PDFs"));
    assert!(!temp_dir.path().join("out.pdf").exists());
}

#[tokio::test]
async fn test_strict_merge_rejects_non_pdf_input() {
    let temp_dir = TempDir::new().unwrap();
    let text = temp_dir.path().join("notes.txt");
    std::fs::write(&text, b"plain text").unwrap();

    let options = DiskOptions {
        overwrite_mode: OverwriteMode::Force,
        ..DiskOptions::with_base_dir(temp_dir.path())
    };

    let err = DiskMerger::new()
        .merge_strict(&[text], Path::new("out.pdf"), &options)
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("failed to merge PDFs"));
    assert!(err.to_string().contains("not a PDF file"));
}

#[tokio::test]
async fn test_no_clobber_keeps_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(&temp_dir, "a.pdf", 1);
    let existing = temp_dir.path().join("out.pdf");
    std::fs::write(&existing, b"existing bytes").unwrap();

    let options = DiskOptions {
        overwrite_mode: OverwriteMode::NoClobber,
        ..DiskOptions::with_base_dir(temp_dir.path())
    };

    let err = DiskMerger::new()
        .merge_strict(&[a], Path::new("out.pdf"), &options)
        .await
        .unwrap_err();

    assert!(matches!(err, PdfSpliceError::OutputExists { .. }));
    assert_eq!(std::fs::read(&existing).unwrap(), b"existing bytes");
}

#[tokio::test]
async fn test_best_effort_with_only_bad_sources_fails() {
    let temp_dir = TempDir::new().unwrap();
    let bad1 = temp_dir.path().join("bad1.pdf");
    let bad2 = temp_dir.path().join("bad2.pdf");
    std::fs::write(&bad1, b"junk").unwrap();
    std::fs::write(&bad2, b"more junk").unwrap();

    let options = DiskOptions {
        overwrite_mode: OverwriteMode::Force,
        ..DiskOptions::with_base_dir(temp_dir.path())
    };

    let err = DiskMerger::new()
        .merge_best_effort(&[bad1, bad2], Path::new("out.pdf"), &options)
        .await
        .unwrap_err();

    assert!(matches!(err, PdfSpliceError::NoSourcesMerged));
    assert!(!temp_dir.path().join("out.pdf").exists());
}
