//! Error types for the lookup client.

use songbook_core::{ExternalServiceError, SongbookError};
use thiserror::Error;

/// Errors that can occur when calling the lookup service.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Invalid base URL
    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),

    /// Service returned a non-200 status
    #[error("Lookup service error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse the response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request did not finish in time
    #[error("Lookup timed out: {0}")]
    Timeout(String),

    /// Service is offline or unreachable
    #[error("Lookup service unreachable: {0}")]
    ServiceUnreachable(String),

    /// Any other HTTP failure
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl LookupError {
    /// Classify a transport-level failure
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Timeout(err.to_string())
        } else if err.is_connect() {
            LookupError::ServiceUnreachable(err.to_string())
        } else {
            LookupError::Request(err)
        }
    }
}

impl From<LookupError> for ExternalServiceError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::ServerError { status, message } => {
                ExternalServiceError::Status { status, message }
            }
            LookupError::ParseError(msg) => ExternalServiceError::InvalidBody(msg),
            LookupError::Timeout(msg) => ExternalServiceError::Timeout(msg),
            LookupError::ServiceUnreachable(msg) | LookupError::InvalidUrl(msg) => {
                ExternalServiceError::Unreachable(msg)
            }
            LookupError::Request(e) => ExternalServiceError::Unreachable(e.to_string()),
        }
    }
}

impl From<LookupError> for SongbookError {
    fn from(err: LookupError) -> Self {
        SongbookError::ExternalService(err.into())
    }
}

/// Result type for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
