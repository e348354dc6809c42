//! Error types for the Scout research service.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application, including configuration, I/O, LLM, search, extraction,
//! and server errors.

use thiserror::Error;

/// Unified error type for the Scout research service.
///
/// All fallible functions in the application return `Result<T, AppError>`.
/// We never panic — errors must be represented and propagated. Note that
/// most pipeline stages deliberately do NOT return `AppError`: retrieval
/// and extraction failures degrade to empty values at the call site and
/// are only logged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// LLM provider errors
    #[error("LLM error: {0}")]
    Llm(String),

    /// Search retrieval errors
    #[error("Search error: {0}")]
    Search(String),

    /// Page content extraction errors
    #[error("Extraction error: {0}")]
    Extract(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
