//! Integration tests for pdf-text
//!
//! PDFs are built in-test with lopdf, one Helvetica text line per page.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pdf_text::{PdfDocument, PdfError};
use std::io::Write;

/// Create a PDF with one page per entry of `lines`
fn create_text_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for line in lines {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

#[test]
fn test_page_count() {
    let bytes = create_text_pdf(&["one", "two", "three"]);
    let doc = PdfDocument::open_from_bytes(&bytes).unwrap();
    assert_eq!(doc.page_count(), 3);
}

#[test]
fn test_extract_text_in_page_order() {
    let bytes = create_text_pdf(&["Sklejka 18mm 1250x2500 B/BB", "Sklejka 21mm 2150x3850 CP/C"]);
    let doc = PdfDocument::open_from_bytes(&bytes).unwrap();

    let text = doc.extract_text().unwrap();
    let first = text.find("1250x2500").unwrap();
    let second = text.find("2150x3850").unwrap();
    assert!(first < second);
}

#[test]
fn test_page_text_out_of_range() {
    let bytes = create_text_pdf(&["only page"]);
    let doc = PdfDocument::open_from_bytes(&bytes).unwrap();

    assert!(doc.page_text(1).unwrap().contains("only page"));
    assert!(matches!(doc.page_text(2), Err(PdfError::InvalidPage(2, 1))));
    assert!(matches!(doc.page_text(0), Err(PdfError::InvalidPage(0, 1))));
}

#[test]
fn test_open_from_path() {
    let bytes = create_text_pdf(&["Order 42"]);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();

    let doc = PdfDocument::open(file.path()).unwrap();
    assert!(doc.extract_text().unwrap().contains("Order 42"));
}
