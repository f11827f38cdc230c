/// Songs API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use songbook_core::{CreateSong, Pagination, Song, SongFilter, SongId, UpdateSong};

#[derive(Debug, Deserialize)]
pub struct SongsQuery {
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub song: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_songs_limit")]
    pub limit: u32,
}

#[derive(Debug, Deserialize)]
pub struct TextQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_verses_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_songs_limit() -> u32 {
    10
}

fn default_verses_limit() -> u32 {
    4
}

#[derive(Debug, Serialize)]
pub struct SongTextResponse {
    pub id: SongId,
    pub page: u32,
    pub limit: u32,
    pub text: String,
}

/// GET /songs
pub async fn list_songs(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<SongsQuery>, QueryRejection>,
) -> Result<Json<Vec<Song>>> {
    let Query(query) = query?;
    let pagination = Pagination::new(query.page, query.limit)?;
    let filter = SongFilter {
        group: query.group,
        song: query.song,
    };

    let songs = app_state.songs.list_songs(&filter, pagination).await?;
    Ok(Json(songs))
}

/// GET /songs/:id
pub async fn get_song(
    id: std::result::Result<Path<SongId>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<Song>> {
    let Path(id) = id?;
    let song = app_state.songs.get_song(id).await?;
    Ok(Json(song))
}

/// GET /songs/:id/text
/// One page of verses
pub async fn get_song_text(
    id: std::result::Result<Path<SongId>, PathRejection>,
    State(app_state): State<AppState>,
    query: std::result::Result<Query<TextQuery>, QueryRejection>,
) -> Result<Json<SongTextResponse>> {
    let Path(id) = id?;
    let Query(query) = query?;
    let pagination = Pagination::new(query.page, query.limit)?;
    let text = app_state.songs.get_song_text(id, pagination).await?;

    Ok(Json(SongTextResponse {
        id,
        page: pagination.page(),
        limit: pagination.limit(),
        text,
    }))
}

/// POST /songs
/// Looks the song up, then stores it
pub async fn create_song(
    State(app_state): State<AppState>,
    request: std::result::Result<Json<CreateSong>, JsonRejection>,
) -> Result<(StatusCode, Json<Song>)> {
    let Json(request) = request?;
    let song = app_state.songs.create_song(request).await?;
    Ok((StatusCode::CREATED, Json(song)))
}

/// PUT /songs/:id
pub async fn update_song(
    id: std::result::Result<Path<SongId>, PathRejection>,
    State(app_state): State<AppState>,
    update: std::result::Result<Json<UpdateSong>, JsonRejection>,
) -> Result<Json<Song>> {
    let Path(id) = id?;
    let Json(update) = update?;
    let song = app_state.songs.update_song(id, update).await?;
    Ok(Json(song))
}

/// DELETE /songs/:id
pub async fn delete_song(
    id: std::result::Result<Path<SongId>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let Path(id) = id?;
    app_state.songs.delete_song(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
