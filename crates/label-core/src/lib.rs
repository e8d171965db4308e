//! Label Core - plywood label data and code derivation
//!
//! This crate provides:
//! - Reference tables for dimension and quality codes
//! - Product code derivation (`<thickness>/<quality>/<dimension>`)
//! - Normalization of AI-extracted order rows and folding them into labels
//! - Label assembly, the print queue and remembered presets
//! - The form state machine binding fields to the product code
//! - The extraction prompt sent to the generative model
//!
//! # Example
//!
//! ```
//! use label_core::{derive_product_code, normalize_dimension};
//!
//! let dimension = normalize_dimension("1250 x 2500");
//! assert_eq!(derive_product_code("18,5", "B/BB", &dimension), "18.5/02/05");
//! ```

pub mod code;
pub mod form;
pub mod label;
pub mod normalize;
pub mod presets;
pub mod prompt;
pub mod queue;
pub mod tables;

pub use code::{derive_product_code, normalize_dimension, normalize_thickness, quality_code};
pub use form::{CodeMode, FormField, FormState, LabelForm, PlywoodType};
pub use label::{finalize_label, format_issued_date, Label};
pub use normalize::{
    fold_rows, normalize_row, normalize_rows, parse_model_output, strip_code_fence, FoldOutcome,
    LineItem,
};
pub use presets::RememberedLabels;
pub use prompt::build_extraction_prompt;
pub use queue::PrintQueue;
pub use tables::{
    find_dimension_code, find_quality_match, quality_display_text, DimensionEntry, QualityEntry,
    ALL_DIMENSIONS, ALL_QUALITIES,
};

use thiserror::Error;

/// Errors raised by user actions on labels
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Errors raised while reading AI extraction output
///
/// Every variant carries the raw payload that caused it.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to parse AI response. Details: {message}. Raw AI response: \"{raw}\"")]
    Parse { message: String, raw: String },

    #[error("AI response was not in the expected array format ({reason}). Raw AI response: \"{raw}\"")]
    UnexpectedShape { reason: String, raw: String },
}

impl ExtractError {
    /// The raw model output that caused the error
    pub fn raw(&self) -> &str {
        match self {
            ExtractError::Parse { raw, .. } | ExtractError::UnexpectedShape { raw, .. } => raw,
        }
    }
}

/// Result type for label operations
pub type Result<T> = std::result::Result<T, LabelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_raw() {
        let err = ExtractError::Parse {
            message: "EOF".into(),
            raw: "[".into(),
        };
        assert_eq!(err.raw(), "[");
        assert!(err.to_string().contains("Raw AI response: \"[\""));
    }
}
