/// Storage-specific errors
use songbook_core::SongbookError;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

impl From<StorageError> for SongbookError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => SongbookError::NotFound { entity, id },
            StorageError::Database(e) => SongbookError::storage(e.to_string()),
        }
    }
}
