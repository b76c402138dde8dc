use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] certfolio_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Certification ID cannot be empty")]
    EmptyCertificationId,
    #[error("Certification not found for id/prefix: {0}")]
    CertificationNotFound(String),
    #[error("{0}")]
    AmbiguousCertificationId(String),
    #[error("Certification '{0}' has no document")]
    NoDocument(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
