//! Error types for contentlift-core

use thiserror::Error;

/// Main error type for the contentlift-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed date key or timestamp
    #[error("invalid date '{input}': {message}")]
    InvalidDate { input: String, message: String },

    /// Content event with an illegal platform/type combination
    #[error("invalid content event {id}: {message}")]
    InvalidContent { id: String, message: String },
}

/// Result type alias for contentlift-core
pub type Result<T> = std::result::Result<T, Error>;
