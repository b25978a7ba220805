//! Error types for the caseload library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all caseload operations.
#[derive(Error, Debug)]
pub enum CaseloadError {
    /// Snapshot file read errors
    #[error("Snapshot error at path '{path}': {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Purchase not found for the given ID
    #[error("Purchase with ID {id} not found")]
    PurchaseNotFound { id: String },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating snapshot errors with path context.
pub struct SnapshotErrorBuilder {
    path: PathBuf,
}

impl SnapshotErrorBuilder {
    /// Create a new snapshot error builder for a path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: std::io::Error) -> CaseloadError {
        CaseloadError::Snapshot {
            path: self.path,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CaseloadError {
        CaseloadError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CaseloadError {
    /// Creates a builder for snapshot errors.
    pub fn snapshot(path: impl Into<PathBuf>) -> SnapshotErrorBuilder {
        SnapshotErrorBuilder::new(path)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Result type alias for caseload operations
pub type Result<T> = std::result::Result<T, CaseloadError>;
