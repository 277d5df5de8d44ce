//! Error types for the fallible outer surfaces.
//!
//! Parsing and tree walks are total and never return errors. Only loading
//! catalogs and editor settings from JSON or from disk can fail.

use thiserror::Error;

/// Errors that can occur while loading catalogs or settings.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error during read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A catalog response whose `object` field is not what was expected.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },

    /// Catalog endpoint name that does not map to a catalog field.
    #[error("Unknown catalog field: {0}")]
    UnknownCatalogField(String),
}

impl Error {
    /// Create an invalid catalog response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "response",
            message: message.into(),
        }
    }

    /// Create an unknown catalog field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownCatalogField(name.into())
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, Error>;
