/// Song service - composes metadata lookup with persistence
use songbook_core::{
    CreateSong, NewSong, Pagination, Result, Song, SongEnricher, SongFilter, SongId, SongStore,
    SongbookError, UpdateSong,
};
use std::sync::Arc;

/// Entry point for every song operation
///
/// Creation is the only operation that sequences enrichment and storage:
/// details are fetched first and the store is only touched once they are
/// complete. Everything else passes straight through to the store.
#[derive(Clone)]
pub struct SongService {
    store: Arc<dyn SongStore>,
    enricher: Arc<dyn SongEnricher>,
}

impl SongService {
    pub fn new(store: Arc<dyn SongStore>, enricher: Arc<dyn SongEnricher>) -> Self {
        Self { store, enricher }
    }

    pub async fn list_songs(&self, filter: &SongFilter, pagination: Pagination) -> Result<Vec<Song>> {
        self.store.list_songs(filter, pagination).await
    }

    pub async fn get_song(&self, id: SongId) -> Result<Song> {
        self.store
            .get_song(id)
            .await?
            .ok_or_else(|| SongbookError::not_found("Song", id))
    }

    pub async fn get_song_text(&self, id: SongId, pagination: Pagination) -> Result<String> {
        self.store.get_song_text(id, pagination).await
    }

    /// Enrich a song from the lookup service, then store it
    pub async fn create_song(&self, request: CreateSong) -> Result<Song> {
        request.validate()?;

        let details = self
            .enricher
            .fetch_details(&request.group, &request.song)
            .await
            .map_err(|e| {
                tracing::warn!(group = %request.group, song = %request.song, "Enrichment failed: {}", e);
                e
            })?;

        let song = self.store.add_song(NewSong::enriched(request, details)).await?;
        tracing::info!(id = song.id, "Added song {} - {}", song.group_name, song.song_name);

        Ok(song)
    }

    pub async fn update_song(&self, id: SongId, update: UpdateSong) -> Result<Song> {
        update.validate()?;
        self.store.update_song(id, update).await
    }

    pub async fn delete_song(&self, id: SongId) -> Result<()> {
        self.store.delete_song(id).await
    }
}
