//! Song catalog queries

use crate::error::{Result, StorageError};
use songbook_core::{fold_case, verses, NewSong, Pagination, Song, SongFilter, SongId, UpdateSong};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Row as stored in the `songs` table
#[derive(Debug, Clone, sqlx::FromRow)]
struct SongRow {
    id: i64,
    group_name: String,
    song: String,
    release_date: String,
    text: String,
    link: String,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Song {
            id: row.id,
            group_name: row.group_name,
            song_name: row.song,
            release_date: row.release_date,
            text: row.text,
            link: row.link,
        }
    }
}

/// List songs matching every condition in `filter`, ordered by id
///
/// Conditions are case-insensitive substring matches against the folded name
/// columns, for any script. Wildcard characters in the filter values match
/// literally.
pub async fn list(pool: &SqlitePool, filter: &SongFilter, pagination: Pagination) -> Result<Vec<Song>> {
    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT id, group_name, song, release_date, text, link FROM songs WHERE 1 = 1",
    );

    for (field, value) in filter.conditions() {
        query
            .push(" AND ")
            .push(field.folded_column())
            .push(" LIKE ")
            .push_bind(contains_pattern(&fold_case(value)))
            .push(" ESCAPE '\\'");
    }

    let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
    query
        .push(" ORDER BY id ASC LIMIT ")
        .push_bind(i64::from(pagination.limit()))
        .push(" OFFSET ")
        .push_bind(offset);

    let rows = query.build_query_as::<SongRow>().fetch_all(pool).await?;

    tracing::debug!(
        count = rows.len(),
        page = pagination.page(),
        limit = pagination.limit(),
        "Listed songs"
    );

    Ok(rows.into_iter().map(Song::from).collect())
}

/// Get song by ID
pub async fn get_by_id(pool: &SqlitePool, id: SongId) -> Result<Option<Song>> {
    let row = sqlx::query_as::<_, SongRow>(
        "SELECT id, group_name, song, release_date, text, link FROM songs WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Song::from))
}

/// Get one page of a song's verses
///
/// Fails with `NotFound` for an unknown id; a page past the last verse is
/// an empty string.
pub async fn get_text(pool: &SqlitePool, id: SongId, pagination: Pagination) -> Result<String> {
    let text: Option<String> = sqlx::query_scalar("SELECT text FROM songs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let text = text.ok_or_else(|| StorageError::not_found("Song", id))?;
    Ok(verses::paginate(&text, pagination))
}

/// Insert a song and return it with its assigned id
pub async fn create(pool: &SqlitePool, song: NewSong) -> Result<Song> {
    let row = sqlx::query_as::<_, SongRow>(
        r#"
        INSERT INTO songs (group_name, song, group_name_folded, song_folded, text, release_date, link)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, group_name, song, release_date, text, link
        "#,
    )
    .bind(&song.group_name)
    .bind(&song.song_name)
    .bind(fold_case(&song.group_name))
    .bind(fold_case(&song.song_name))
    .bind(&song.text)
    .bind(&song.release_date)
    .bind(&song.link)
    .fetch_one(pool)
    .await?;

    tracing::info!(id = row.id, group = %row.group_name, song = %row.song, "Song created");

    Ok(row.into())
}

/// Replace every mutable field of a song
pub async fn update(pool: &SqlitePool, id: SongId, song: UpdateSong) -> Result<Song> {
    let row = sqlx::query_as::<_, SongRow>(
        r#"
        UPDATE songs
        SET group_name = ?, song = ?, group_name_folded = ?, song_folded = ?,
            text = ?, release_date = ?, link = ?
        WHERE id = ?
        RETURNING id, group_name, song, release_date, text, link
        "#,
    )
    .bind(&song.group_name)
    .bind(&song.song_name)
    .bind(fold_case(&song.group_name))
    .bind(fold_case(&song.song_name))
    .bind(&song.text)
    .bind(&song.release_date)
    .bind(&song.link)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let row = row.ok_or_else(|| StorageError::not_found("Song", id))?;
    tracing::info!(id, "Song updated");

    Ok(row.into())
}

/// Delete a song
pub async fn delete(pool: &SqlitePool, id: SongId) -> Result<()> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Song", id));
    }

    tracing::info!(id, "Song deleted");
    Ok(())
}

/// `LIKE` pattern matching `value` anywhere, with `\` as the escape character
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
