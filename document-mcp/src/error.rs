//! Error handling for the document library
//!
//! Lookups of unknown identifiers are the only domain failure. The remaining
//! variants cover configuration, seed files and template rendering.

use crate::config::ConfigError;
use crate::documents::DocumentId;
use std::io;
use thiserror::Error;

/// The main error type for the document library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentMcpError {
    /// No document with this identifier exists in the store
    #[error("Doc with id {0} not found")]
    DocumentNotFound(DocumentId),

    /// A seed listed the same identifier twice
    #[error("Duplicate document id in seed: {0}")]
    DuplicateDocument(DocumentId),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Template parsing or rendering failed
    #[error("Template error: {0}")]
    Template(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// YAML serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocumentMcpError {
    /// Returns true when the error is a missing document lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DocumentNotFound(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DocumentMcpError>;
