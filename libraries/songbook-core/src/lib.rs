//! Songbook Core
//!
//! Storage-agnostic types, traits, and error handling for the Songbook
//! song catalog.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `NewSong`, `UpdateSong`, `SongDetails`
//! - **Query Types**: `SongFilter`, `SongField`, `Pagination`, `fold_case`
//! - **Verse Pagination**: splitting lyric text into verses and slicing pages of them
//! - **Core Traits**: `SongStore` (persistence) and `SongEnricher` (metadata lookup)
//! - **Error Handling**: Unified `SongbookError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use songbook_core::{verses, Pagination};
//!
//! let text = "verse1\n\nverse2\n\nverse3";
//! let page = Pagination::new(2, 2).unwrap();
//! assert_eq!(verses::paginate(text, page), "verse3");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;
pub mod verses;

// Re-export commonly used types
pub use error::{ExternalServiceError, Result, SongbookError};
pub use storage::SongStore;
pub use traits::SongEnricher;

pub use types::{
    fold_case, CreateSong, NewSong, Pagination, Song, SongDetails, SongField, SongFilter, SongId,
    UpdateSong,
};
