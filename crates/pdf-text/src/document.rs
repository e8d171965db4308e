//! PDF Document wrapper

use crate::{PdfError, Result};
use lopdf::Document;
use std::path::Path;
use tracing::{debug, warn};

/// A loaded PDF document
pub struct PdfDocument {
    inner: Document,
}

impl PdfDocument {
    /// Open a PDF file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::open_from_bytes(&data)
    }

    /// Open a PDF from bytes
    pub fn open_from_bytes(data: &[u8]) -> Result<Self> {
        let inner = Document::load_mem(data).map_err(|e| PdfError::OpenError(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Get the number of pages
    pub fn page_count(&self) -> usize {
        self.inner.get_pages().len()
    }

    /// Extract the text of one page (1-indexed)
    pub fn page_text(&self, page: u32) -> Result<String> {
        let count = self.page_count();
        if page == 0 || page as usize > count {
            return Err(PdfError::InvalidPage(page, count));
        }

        self.inner
            .extract_text(&[page])
            .map_err(|e| PdfError::ExtractError(page, e.to_string()))
    }

    /// Extract the text of every page, joined by newlines in page order
    ///
    /// Pages that fail to decode contribute an empty string so one damaged
    /// page does not hide the rest of the document.
    pub fn extract_text(&self) -> Result<String> {
        let pages = self.inner.get_pages();
        let mut texts = Vec::with_capacity(pages.len());

        for page in pages.keys() {
            match self.page_text(*page) {
                Ok(text) => texts.push(text),
                Err(e) => {
                    warn!(page = *page, error = %e, "skipping unreadable PDF page");
                    texts.push(String::new());
                }
            }
        }

        debug!(pages = texts.len(), "extracted PDF text");
        Ok(texts.join("\n"))
    }
}
