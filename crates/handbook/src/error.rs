//! Error types for commandbook.
//!
//! This module defines all error types used throughout the commandbook crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commandbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Catalog Errors ===
    /// The catalog data could not be parsed.
    #[error("failed to parse catalog data: {source}")]
    CatalogParse {
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Catalog validation failed.
    #[error("invalid catalog: {message}")]
    CatalogValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to read a user-supplied data file.
    #[error("failed to read data file {path}: {source}")]
    DataFileRead {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Clipboard Errors ===
    /// Clipboard access failed.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for commandbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new catalog parse error.
    #[must_use]
    pub fn catalog_parse(source: serde_json::Error) -> Self {
        Self::CatalogParse { source }
    }

    /// Create a new catalog validation error.
    #[must_use]
    pub fn catalog_validation(message: impl Into<String>) -> Self {
        Self::CatalogValidation {
            message: message.into(),
        }
    }

    /// Create a new configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create a new clipboard error.
    #[must_use]
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard(message.into())
    }

    /// Check if this error originates from catalog loading or validation.
    #[must_use]
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            Self::CatalogParse { .. } | Self::CatalogValidation { .. } | Self::DataFileRead { .. }
        )
    }
}
