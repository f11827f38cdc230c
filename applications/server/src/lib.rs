//! Songbook Server Library
//!
//! HTTP service for a song catalog whose entries are completed from an
//! external lookup service when they are added.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::SongService;
pub use state::AppState;
