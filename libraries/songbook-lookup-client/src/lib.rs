//! Songbook Lookup Client
//!
//! HTTP client for the external song metadata service that supplies release
//! dates, lyrics and links for a (group, song) pair.
//!
//! # Example
//!
//! ```ignore
//! use songbook_lookup_client::{LookupClient, LookupConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LookupClient::new(LookupConfig::new("https://lookup.example.com"))?;
//!
//!     let details = client.get_song_details("Muse", "Supremacy").await?;
//!     println!("Released {}", details.release_date);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::LookupClient;
pub use error::{LookupError, Result};
pub use types::LookupConfig;
