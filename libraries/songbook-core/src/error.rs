/// Core error types for Songbook
use thiserror::Error;

/// Result type alias using `SongbookError`
pub type Result<T> = std::result::Result<T, SongbookError>;

/// Core error type for Songbook
///
/// Every failure surfaced by the store, the enricher, or the service is
/// classified into exactly one of these kinds.
#[derive(Error, Debug)]
pub enum SongbookError {
    /// Caller input missing or malformed, detected before any I/O
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Referenced entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up
        entity: String,
        /// Identifier that did not match
        id: String,
    },

    /// The external lookup service failed
    #[error("External service error: {0}")]
    ExternalService(#[from] ExternalServiceError),

    /// Backend I/O failure of any kind
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Ways the external lookup call can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExternalServiceError {
    /// Lookup service answered with a non-200 status
    #[error("unexpected status code {status}: {message}")]
    Status {
        /// HTTP status code returned by the service
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Response body could not be parsed into song details
    #[error("invalid response body: {0}")]
    InvalidBody(String),

    /// The request did not complete within the configured timeout
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection, DNS or other transport failure
    #[error("service unreachable: {0}")]
    Unreachable(String),
}

impl SongbookError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
