//! Label layout and print rendering
//!
//! This crate provides:
//! - Layout schema types (element positions, saved layouts, default layout)
//! - Print formats and sheet arrangement
//! - Element text resolution for a label
//! - Print HTML rendering (single label, whole queue, verification list)
//!
//! # Example
//!
//! ```ignore
//! use label_template::{LabelLayout, PrintFormat, PrintRenderer, SheetArrangement};
//!
//! let layout = LabelLayout::initial();
//! let html = PrintRenderer::new(&layout, PrintFormat::default_format())
//!     .with_arrangement(SheetArrangement::from_copies(2))
//!     .render_labels(queue.labels())?;
//! ```

pub mod blocks;
pub mod parser;
mod renderer;
mod schema;

pub use blocks::{LabelElement, TextContent};
pub use parser::{escape_html, parse_layout, parse_saved_layouts, saved_layouts_to_json};
pub use renderer::{PrintRenderer, DEFAULT_BACKGROUND_URL};
pub use schema::*;

use thiserror::Error;

/// Errors that can occur during layout and print processing
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse layout: {0}")]
    ParseError(String),

    #[error("Layout error: {0}")]
    LayoutError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TemplateError {
    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            TemplateError::LayoutError(msg) | TemplateError::RenderError(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let err = TemplateError::LayoutError("Please enter a name for the layout.".into());
        assert_eq!(err.user_message(), "Please enter a name for the layout.");
        let err = TemplateError::ParseError("eof".into());
        assert_eq!(err.user_message(), "Failed to parse layout: eof");
    }
}
