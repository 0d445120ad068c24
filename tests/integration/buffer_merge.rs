//! Integration tests for in-memory buffer merging.

use pdfsplice::merge::{Merger, merge_buffers};

use crate::common::{page_count, page_widths, pdf_with_page_widths, pdf_with_pages};

#[test]
fn test_merge_preserves_input_order() {
    // Three sources with recognizable page widths: A(2), B(3), C(1).
    let a = pdf_with_page_widths(&[101, 102]);
    let b = pdf_with_page_widths(&[201, 202, 203]);
    let c = pdf_with_page_widths(&[301]);

    let merged = Merger::new().merge(&[a, b, c]).unwrap();

    assert_eq!(page_count(&merged), 6);
    assert_eq!(page_widths(&merged), vec![101, 102, 201, 202, 203, 301]);
}

#[test]
fn test_merge_many_single_page_sources() {
    let sources: Vec<Vec<u8>> = (0..10).map(|_| pdf_with_pages(1)).collect();

    let merged = merge_buffers(&sources).unwrap();

    assert_eq!(page_count(&merged), 10);
}

#[test]
fn test_merge_zero_buffers_is_a_valid_document() {
    let sources: Vec<Vec<u8>> = Vec::new();

    let merged = merge_buffers(&sources).unwrap();

    assert_eq!(page_count(&merged), 0);
}

#[test]
fn test_merge_of_one_preserves_pages() {
    let source = pdf_with_page_widths(&[11, 22, 33]);

    let merged = merge_buffers(&[source]).unwrap();

    assert_eq!(page_widths(&merged), vec![11, 22, 33]);
}

#[test]
fn test_zero_page_source_between_others() {
    let sources = vec![
        pdf_with_page_widths(&[1]),
        pdf_with_pages(0),
        pdf_with_page_widths(&[2]),
    ];

    let merged = merge_buffers(&sources).unwrap();

    assert_eq!(page_widths(&merged), vec![1, 2]);
}

#[test]
fn test_merged_output_can_be_merged_again() {
    let first = merge_buffers(&[pdf_with_pages(2), pdf_with_pages(1)]).unwrap();
    let second = merge_buffers(&[first, pdf_with_pages(3)]).unwrap();

    assert_eq!(page_count(&second), 6);
}

#[test]
fn test_concurrent_merges_are_independent() {
    use std::thread;

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            thread::spawn(move || {
                let sources: Vec<Vec<u8>> = (0..n).map(|_| pdf_with_pages(1)).collect();
                let merged = Merger::new().merge(&sources).unwrap();
                page_count(&merged)
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![1, 2, 3, 4]);
}
