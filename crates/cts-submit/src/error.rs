//! Error types for the submission client.

use thiserror::Error;

/// Errors that can occur while submitting records to the import service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// The service URL or credentials are missing or unusable.
    #[error("submission not configured: {0}")]
    Configuration(String),

    /// The service accepted the connection but rejected the record.
    #[error("import of {object} rejected with status {status}: {body}")]
    Rejected {
        /// Object identifier of the rejected record.
        object: String,
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The import document could not be built for a record.
    #[error("could not build import document for {object}: {message}")]
    Document {
        /// Object identifier of the record.
        object: String,
        /// Underlying serialization failure.
        message: String,
    },
}

impl SubmitError {
    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for submission operations.
pub type Result<T> = std::result::Result<T, SubmitError>;
