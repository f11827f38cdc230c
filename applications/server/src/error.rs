/// Server error types
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use songbook_core::SongbookError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Songbook(#[from] SongbookError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Songbook(SongbookError::Validation(_)) => StatusCode::BAD_REQUEST,
            ServerError::Songbook(SongbookError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ServerError::Songbook(SongbookError::ExternalService(_)) => StatusCode::BAD_GATEWAY,
            ServerError::Songbook(SongbookError::Storage(_))
            | ServerError::Config(_)
            | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Malformed paths, query strings and bodies are caller input errors
impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        SongbookError::validation(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        SongbookError::validation(rejection.body_text()).into()
    }
}

impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        SongbookError::validation(rejection.body_text()).into()
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self {
            ServerError::Songbook(SongbookError::Validation(msg)) => msg,
            ServerError::Songbook(ref e @ SongbookError::NotFound { .. }) => e.to_string(),
            ServerError::Songbook(SongbookError::ExternalService(ref e)) => {
                tracing::error!("Song lookup failed: {}", e);
                "Failed to fetch song details".to_string()
            }
            ServerError::Songbook(SongbookError::Storage(ref msg)) => {
                tracing::error!("Storage error: {}", msg);
                "Storage error".to_string()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                "Configuration error".to_string()
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                "IO error".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use songbook_core::ExternalServiceError;

    #[test]
    fn maps_core_errors_to_statuses() {
        let cases = [
            (SongbookError::validation("bad"), StatusCode::BAD_REQUEST),
            (SongbookError::not_found("Song", 1), StatusCode::NOT_FOUND),
            (
                SongbookError::ExternalService(ExternalServiceError::Timeout("slow".into())),
                StatusCode::BAD_GATEWAY,
            ),
            (SongbookError::storage("disk"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(ServerError::from(err).status_code(), expected);
        }
    }

    #[test]
    fn storage_errors_are_internal() {
        let response = ServerError::from(SongbookError::storage("no such table: songs"))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
