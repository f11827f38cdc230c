//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::Router;
use songbook_lookup_client::{LookupClient, LookupConfig};
use songbook_server::{api, services::SongService, state::AppState};
use songbook_storage::SqliteSongStore;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Router wired to a real SQLite file and a mock lookup service
pub struct TestApp {
    pub router: Router,
    pub lookup: MockServer,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("songbook.db").display());
        let pool = songbook_storage::create_pool(&db_url, 5).await.unwrap();
        songbook_storage::run_migrations(&pool).await.unwrap();

        let lookup = MockServer::start().await;
        let client = LookupClient::new(
            LookupConfig::new(lookup.uri()).with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let songs = SongService::new(Arc::new(SqliteSongStore::new(pool)), Arc::new(client));
        let router = api::router(AppState::new(Arc::new(songs)));

        Self {
            router,
            lookup,
            _temp_dir: temp_dir,
        }
    }

    /// Answer lookups for one (group, song) pair
    pub async fn mount_song(&self, group: &str, song: &str, text: &str) {
        Mock::given(method("GET"))
            .and(path("/info"))
            .and(query_param("group", group))
            .and(query_param("song", song))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "releaseDate": "16.07.2006",
                "text": text,
                "link": format!("https://example.com/{}", song.to_lowercase()),
            })))
            .mount(&self.lookup)
            .await;
    }
}

/// Test fixtures
pub mod fixtures {
    pub const SUPREMACY_TEXT: &str = "verse1\n\nverse2\n\nverse3";
}
