/// Shared application state
use crate::services::SongService;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub songs: Arc<SongService>,
}

impl AppState {
    pub fn new(songs: Arc<SongService>) -> Self {
        Self { songs }
    }
}
