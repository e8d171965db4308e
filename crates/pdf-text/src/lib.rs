//! PDF Text - page text extraction
//!
//! This crate provides functionality for:
//! - Opening PDF documents from a path or from bytes
//! - Extracting the text of every page in page order
//!
//! # Example
//!
//! ```ignore
//! use pdf_text::PdfDocument;
//!
//! let doc = PdfDocument::open("order.pdf")?;
//! let text = doc.extract_text()?;
//! ```

mod document;

pub use document::PdfDocument;

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to open PDF: {0}")]
    OpenError(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(u32, usize),

    #[error("Failed to extract text from page {0}: {1}")]
    ExtractError(u32, String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;
