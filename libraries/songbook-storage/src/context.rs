use crate::songs;
use async_trait::async_trait;
use songbook_core::{
    error::Result, storage::SongStore, NewSong, Pagination, Song, SongFilter, SongId, UpdateSong,
};
use sqlx::SqlitePool;

/// Song store backed by `SQLite`
#[derive(Debug, Clone)]
pub struct SqliteSongStore {
    pool: SqlitePool,
}

impl SqliteSongStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongStore for SqliteSongStore {
    async fn list_songs(&self, filter: &SongFilter, pagination: Pagination) -> Result<Vec<Song>> {
        Ok(songs::list(&self.pool, filter, pagination).await?)
    }

    async fn get_song(&self, id: SongId) -> Result<Option<Song>> {
        Ok(songs::get_by_id(&self.pool, id).await?)
    }

    async fn get_song_text(&self, id: SongId, pagination: Pagination) -> Result<String> {
        Ok(songs::get_text(&self.pool, id, pagination).await?)
    }

    async fn add_song(&self, song: NewSong) -> Result<Song> {
        Ok(songs::create(&self.pool, song).await?)
    }

    async fn update_song(&self, id: SongId, song: UpdateSong) -> Result<Song> {
        Ok(songs::update(&self.pool, id, song).await?)
    }

    async fn delete_song(&self, id: SongId) -> Result<()> {
        Ok(songs::delete(&self.pool, id).await?)
    }
}
