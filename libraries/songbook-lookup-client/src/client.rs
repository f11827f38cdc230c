//! Lookup service client.

use crate::error::{LookupError, Result};
use crate::types::LookupConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use songbook_core::{SongDetails, SongEnricher};
use tracing::{debug, warn};
use url::Url;

/// Client for the song metadata lookup service.
///
/// Performs a single `GET {base_url}/info?group=..&song=..` per lookup, with
/// bounded timeouts and no retries.
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: Client,
    base_url: String,
}

impl LookupClient {
    /// Create a new client with the given configuration.
    pub fn new(config: LookupConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(LookupError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| LookupError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LookupError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Songbook/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(LookupError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch release date, lyrics and link for a song.
    pub async fn get_song_details(&self, group: &str, song: &str) -> Result<SongDetails> {
        let url = format!("{}/info", self.base_url);
        debug!(url = %url, group = %group, song = %song, "Requesting song details");

        let response = self
            .http
            .get(&url)
            .query(&[("group", group), ("song", song)])
            .send()
            .await
            .map_err(LookupError::from_transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), group = %group, song = %song, "Lookup rejected");
            return Err(LookupError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(LookupError::from_transport)?;
        let details: SongDetails = serde_json::from_slice(&body).map_err(|e| {
            LookupError::ParseError(format!("Failed to parse song details: {}", e))
        })?;

        debug!(group = %group, song = %song, release_date = %details.release_date, "Fetched song details");

        Ok(details)
    }
}

#[async_trait]
impl SongEnricher for LookupClient {
    async fn fetch_details(&self, group: &str, song: &str) -> songbook_core::Result<SongDetails> {
        Ok(self.get_song_details(group, song).await?)
    }
}
