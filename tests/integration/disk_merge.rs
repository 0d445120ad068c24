//! Integration tests for the disk-facing merge operations.

use std::path::Path;

use pdfsplice::config::{DiskOptions, OverwriteMode};
use pdfsplice::merge::DiskMerger;
use tempfile::TempDir;

use crate::common::{page_count_of_file, write_pdf};

fn force_options(dir: &TempDir) -> DiskOptions {
    DiskOptions {
        overwrite_mode: OverwriteMode::Force,
        ..DiskOptions::with_base_dir(dir.path())
    }
}

#[tokio::test]
async fn test_strict_merge_writes_combined_file() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(&temp_dir, "a.pdf", 2);
    let b = write_pdf(&temp_dir, "b.pdf", 3);

    let report = DiskMerger::new()
        .merge_strict(&[a, b], Path::new("merged.pdf"), &force_options(&temp_dir))
        .await
        .unwrap();

    assert_eq!(report.total_pages, 5);
    assert_eq!(report.merged.len(), 2);
    assert_eq!(page_count_of_file(&report.output), 5);
}

#[tokio::test]
async fn test_strict_merge_resolves_relative_output_under_base() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(&temp_dir, "a.pdf", 1);

    let report = DiskMerger::new()
        .merge_strict(
            &[a],
            Path::new("reports/2024/summary.pdf"),
            &force_options(&temp_dir),
        )
        .await
        .unwrap();

    assert_eq!(
        report.output,
        temp_dir.path().join("reports/2024/summary.pdf")
    );
    assert!(report.output.exists());
}

#[tokio::test]
async fn test_best_effort_reports_skipped_sources() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(&temp_dir, "a.pdf", 1);
    let missing = temp_dir.path().join("missing.pdf");
    let c = write_pdf(&temp_dir, "c.pdf", 2);

    let report = DiskMerger::new()
        .merge_best_effort(
            &[a.clone(), missing.clone(), c.clone()],
            Path::new("merged.pdf"),
            &force_options(&temp_dir),
        )
        .await
        .unwrap();

    assert_eq!(report.merged, vec![a, c]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path, missing);
    assert!(report.failed[0].reason.contains("file not found"));
    assert_eq!(report.total_pages, 3);
    assert_eq!(page_count_of_file(&report.output), 3);
}

#[tokio::test]
async fn test_batch_report_serializes_to_json() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(&temp_dir, "a.pdf", 1);

    let report = DiskMerger::new()
        .merge_best_effort(&[a], Path::new("merged.pdf"), &force_options(&temp_dir))
        .await
        .unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"totalPages\":1"));
    assert!(json.contains("\"failed\":[]"));
}

#[tokio::test]
async fn test_sandbox_rejects_escaping_output() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_pdf(&temp_dir, "a.pdf", 1);

    let result = DiskMerger::new()
        .merge_strict(
            &[a],
            Path::new("../../outside.pdf"),
            &force_options(&temp_dir),
        )
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_sandbox_escape_allowed_when_opted_in() {
    let input_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let a = write_pdf(&input_dir, "a.pdf", 1);

    let options = DiskOptions {
        allow_outside_base: true,
        overwrite_mode: OverwriteMode::Force,
        ..DiskOptions::with_base_dir(input_dir.path())
    };
    let outside = output_dir.path().join("merged.pdf");

    let report = DiskMerger::new()
        .merge_strict(&[a], &outside, &options)
        .await
        .unwrap();

    assert_eq!(report.output, outside);
    assert!(outside.exists());
}
