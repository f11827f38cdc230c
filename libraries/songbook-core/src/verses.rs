//! Verse splitting and verse-based pagination of lyric text
//!
//! A verse is a run of text delimited by a blank line (`"\n\n"`). Verses are
//! derived on every read and never stored separately, so splitting followed
//! by joining must reproduce the text byte for byte.

use crate::types::Pagination;

/// Separator between consecutive verses
pub const VERSE_SEPARATOR: &str = "\n\n";

/// Split text into verses
///
/// Empty text yields a single empty verse.
pub fn split(text: &str) -> Vec<&str> {
    text.split(VERSE_SEPARATOR).collect()
}

/// Join verses back into text
pub fn join(verses: &[&str]) -> String {
    verses.join(VERSE_SEPARATOR)
}

/// Select one page of verses and rejoin them
///
/// A page that starts past the last verse yields an empty string.
pub fn paginate(text: &str, pagination: Pagination) -> String {
    let verses = split(text);
    let start = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
    if start > verses.len() {
        return String::new();
    }

    let limit = usize::try_from(pagination.limit()).unwrap_or(usize::MAX);
    let end = start.saturating_add(limit).min(verses.len());
    join(&verses[start..end])
}
