/// Server services
pub mod songs;

pub use songs::SongService;
