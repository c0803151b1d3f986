//! Error types for the idocr-core library.
//!
//! Extraction and quality evaluation are total over their inputs and
//! never fail; errors only arise around them (reading engine output,
//! configuration files).

use thiserror::Error;

/// Main error type for the idocr library.
#[derive(Error, Debug)]
pub enum IdocrError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a recognition result or config as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the idocr library.
pub type Result<T> = std::result::Result<T, IdocrError>;
