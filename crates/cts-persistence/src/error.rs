//! Persistence error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from saving or loading extracts and id lists.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error, tagged with the operation that failed.
    #[error("failed to {operation} {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extract written by a newer version of the tool.
    #[error("extract version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion {
        found: u32,
        max_supported: u32,
        path: PathBuf,
    },

    /// Failed to serialize the extract.
    #[error("failed to serialize extract")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Failed to parse the extract.
    #[error("failed to parse extract {path}")]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Temp file could not be moved into place.
    #[error("failed to complete save to {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
