//! PDF text sources

use crate::Result;
use pdf_text::PdfDocument;

/// Yields the text of a PDF, pages concatenated in order
pub trait PdfTextSource {
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;
}

/// Text source backed by lopdf
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfTextSource;

impl PdfTextSource for LopdfTextSource {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        let doc = PdfDocument::open_from_bytes(bytes)?;
        Ok(doc.extract_text()?)
    }
}
