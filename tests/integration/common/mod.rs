//! Shared helpers for integration tests.
//!
//! Fixtures are built programmatically with `lopdf` so the test suite
//! carries no binary assets. Each source page gets a distinct MediaBox
//! width, which lets tests assert page ordering across a merge.

use lopdf::{Document, Object, dictionary};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build a PDF buffer with one page per entry of `widths`.
///
/// The width ends up as the third MediaBox coordinate of its page, so a
/// merged document can be checked for page order by reading widths back.
pub fn pdf_with_page_widths(widths: &[i64]) -> Vec<u8> {
    let mut doc = Document::with_version("1.4");

    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for &width in widths {
        let page_id = doc.new_object_id();
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), 792.into()],
        };
        doc.objects.insert(page_id, page.into());
        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => widths.len() as i64,
    };
    doc.objects.insert(pages_id, pages.into());

    let catalog_id = doc.new_object_id();
    let catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    doc.objects.insert(catalog_id, catalog.into());
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// Build a PDF buffer with the given number of identical pages.
pub fn pdf_with_pages(pages: usize) -> Vec<u8> {
    pdf_with_page_widths(&vec![612; pages])
}

/// Write a PDF with the given page count into a temp directory.
pub fn write_pdf(dir: &TempDir, name: &str, pages: usize) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, pdf_with_pages(pages)).unwrap();
    path
}

/// Number of pages in a serialized document.
pub fn page_count(bytes: &[u8]) -> usize {
    Document::load_mem(bytes).unwrap().get_pages().len()
}

/// Number of pages in a document on disk.
pub fn page_count_of_file(path: &Path) -> usize {
    Document::load(path).unwrap().get_pages().len()
}

/// MediaBox widths of a serialized document's pages, in page order.
pub fn page_widths(bytes: &[u8]) -> Vec<i64> {
    let doc = Document::load_mem(bytes).unwrap();

    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let Ok(Object::Dictionary(dict)) = doc.get_object(page_id) else {
                panic!("page object is not a dictionary");
            };
            let Ok(Object::Array(mediabox)) = dict.get(b"MediaBox") else {
                panic!("page has no MediaBox array");
            };
            mediabox[2].as_i64().unwrap()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_round_trips() {
        let bytes = pdf_with_pages(3);
        assert_eq!(page_count(&bytes), 3);
    }

    #[test]
    fn test_fixture_widths_round_trip() {
        let bytes = pdf_with_page_widths(&[100, 200, 300]);
        assert_eq!(page_widths(&bytes), vec![100, 200, 300]);
    }
}
