//! Storage trait for the song catalog

use crate::error::Result;
use crate::types::{NewSong, Pagination, Song, SongFilter, SongId, UpdateSong};
use async_trait::async_trait;

/// Persistence operations for songs
///
/// This is the only way the rest of the system touches the catalog.
/// Update and delete of an unknown id fail with `SongbookError::NotFound`.
#[async_trait]
pub trait SongStore: Send + Sync {
    /// List songs matching `filter`, ordered by id, one page at a time
    async fn list_songs(&self, filter: &SongFilter, pagination: Pagination) -> Result<Vec<Song>>;

    /// Get a song by id
    async fn get_song(&self, id: SongId) -> Result<Option<Song>>;

    /// Get one page of a song's verses, rejoined with the verse separator
    async fn get_song_text(&self, id: SongId, pagination: Pagination) -> Result<String>;

    /// Insert an enriched song and return it with its assigned id
    async fn add_song(&self, song: NewSong) -> Result<Song>;

    /// Replace every mutable field of a song
    async fn update_song(&self, id: SongId, song: UpdateSong) -> Result<Song>;

    /// Delete a song
    async fn delete_song(&self, id: SongId) -> Result<()>;
}
