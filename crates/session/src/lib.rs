//! Label Session - orchestration of the label workflow
//!
//! This crate provides:
//! - The session: form, preview, print queue, presets, layouts and print settings
//! - A key-value store interface with file and in-memory implementations
//! - The generative-model client used to read order documents
//! - PDF text sources
//! - Configuration loading
//!
//! # Example
//!
//! ```ignore
//! use label_session::{FileStore, GeminiClient, LopdfTextSource, Session, SessionConfig};
//!
//! let config = SessionConfig::load(None)?;
//! let store = FileStore::new(config.store_dir()?);
//! let mut session = Session::open(store, config.clone());
//! let model = GeminiClient::from_config(&config)?;
//! let status = session.analyze_pdf(&bytes, &LopdfTextSource, &model, today).await?;
//! ```

pub mod config;
pub mod model;
mod session;
pub mod source;
pub mod store;

pub use config::SessionConfig;
pub use model::{ExtractionModel, GeminiClient};
pub use session::Session;
pub use source::{LopdfTextSource, PdfTextSource};
pub use store::{
    FileStore, KeyValueStore, MemoryStore, PersistedState, DEFAULT_LAYOUT_ID_KEY,
    REMEMBERED_LABELS_KEY, SAVED_LAYOUTS_KEY,
};

use label_core::{ExtractError, LabelError};
use label_template::TemplateError;
use pdf_text::PdfError;
use thiserror::Error;

/// Errors that can occur during a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Label(#[from] LabelError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Failed to read PDF: {0}")]
    Pdf(#[from] PdfError),

    #[error("No text could be extracted from the PDF.")]
    NoText,

    #[error("Generative model is not configured. Set GEMINI_API_KEY or API_KEY.")]
    ModelNotConfigured,

    #[error("Failed to get data from AI. Details: {0}")]
    Model(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SessionError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SessionError::Model(format!("request timed out: {error}"))
        } else {
            SessionError::Model(error.to_string())
        }
    }
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
