/// Core traits for Songbook
use crate::error::Result;
use crate::types::SongDetails;
use async_trait::async_trait;

/// Song metadata lookup
///
/// Implementers fetch the release date, lyrics and link for a song from an
/// external source. Failures are reported as
/// `SongbookError::ExternalService`.
#[async_trait]
pub trait SongEnricher: Send + Sync {
    /// Fetch details for the given group and song
    async fn fetch_details(&self, group: &str, song: &str) -> Result<SongDetails>;
}
