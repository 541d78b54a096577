//! Error types for export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and normalizing the export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Export file not found.
    #[error("export file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the export file.
    #[error("failed to read export file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Export file decoded to no usable lines.
    #[error("export file is empty: {path}")]
    EmptyExport { path: PathBuf },

    /// A line's cell count does not match the column schema. The caller
    /// decides whether to skip the line or abort the run.
    #[error("malformed line: expected {expected} fields, found {found}")]
    MalformedLine { expected: usize, found: usize },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
