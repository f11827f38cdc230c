/// API route modules
pub mod health;
pub mod songs;

use crate::state::AppState;
use axum::{routing::get, Router};

/// Song catalog routes with state attached
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/songs", get(songs::list_songs).post(songs::create_song))
        .route(
            "/songs/:id",
            get(songs::get_song)
                .put(songs::update_song)
                .delete(songs::delete_song),
        )
        .route("/songs/:id/text", get(songs::get_song_text))
        .with_state(app_state)
}
