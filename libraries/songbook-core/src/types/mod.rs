//! Domain types for the song catalog

mod query;
mod song;

pub use query::{fold_case, Pagination, SongField, SongFilter};
pub use song::{CreateSong, NewSong, Song, SongDetails, SongId, UpdateSong};
