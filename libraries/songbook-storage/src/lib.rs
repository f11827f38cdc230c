//! Songbook Storage
//!
//! `SQLite` persistence for the Songbook song catalog.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the `songs` module owns its queries and row mapping
//! - **Explicit Columns**: every query names its columns; rows are bound by name
//! - **Context**: `SqliteSongStore` exposes the slice through the
//!   `songbook_core::SongStore` trait
//!
//! # Example
//!
//! ```rust,no_run
//! use songbook_storage::{create_pool, run_migrations, SqliteSongStore};
//! use songbook_core::{SongFilter, SongStore, Pagination};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://songbook.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteSongStore::new(pool);
//! let songs = store
//!     .list_songs(&SongFilter::by_group("muse"), Pagination::new(1, 10)?)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod songs;

pub use context::SqliteSongStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://songbook.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(max_connections, "SQLite pool ready");

    Ok(pool)
}
