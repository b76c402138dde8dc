//! Error types for certfolio-core

use thiserror::Error;

/// Result type alias using certfolio-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in certfolio-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The certification API answered with a non-success status
    #[error("Certification API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Inline document payload could not be decoded
    #[error("Invalid document payload: {0}")]
    Decode(String),

    /// A browser API call failed
    #[error("Browser error: {0}")]
    Browser(String),

    /// A certification id that is blank or of an unsupported type
    #[error("Invalid certification id: {0:?}")]
    InvalidId(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
