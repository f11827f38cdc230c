//! Listing filters and pagination

use crate::error::{Result, SongbookError};

/// Catalog fields that may be filtered on
///
/// Each variant maps to a fixed column name, so no caller-supplied text ever
/// reaches the query string as an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SongField {
    /// Performing group or artist
    GroupName,
    /// Track title
    SongName,
}

impl SongField {
    /// Column of the `songs` table holding this field passed through [`fold_case`]
    pub fn folded_column(self) -> &'static str {
        match self {
            SongField::GroupName => "group_name_folded",
            SongField::SongName => "song_folded",
        }
    }
}

/// Case folding shared by stored names and filter values
///
/// Unicode-aware, so `Кино` and `кино` or `BEYONCÉ` and `Beyoncé` fold to the
/// same string.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Substring filters for listing songs, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter {
    /// Case-insensitive substring of the group name
    pub group: Option<String>,
    /// Case-insensitive substring of the song name
    pub song: Option<String>,
}

impl SongFilter {
    /// Filter on group name only
    pub fn by_group(group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            song: None,
        }
    }

    /// Filter on song name only
    pub fn by_song(song: impl Into<String>) -> Self {
        Self {
            group: None,
            song: Some(song.into()),
        }
    }

    /// Active conditions; empty values count as absent
    pub fn conditions(&self) -> impl Iterator<Item = (SongField, &str)> + '_ {
        [
            (SongField::GroupName, self.group.as_deref()),
            (SongField::SongName, self.song.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| match value {
            Some(v) if !v.is_empty() => Some((field, v)),
            _ => None,
        })
    }
}

/// 1-based page number and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    /// Create pagination, rejecting a zero page or limit
    pub fn new(page: u32, limit: u32) -> Result<Self> {
        if page == 0 {
            return Err(SongbookError::validation("page must be at least 1"));
        }
        if limit == 0 {
            return Err(SongbookError::validation("limit must be at least 1"));
        }
        Ok(Self { page, limit })
    }

    /// Page number, starting at 1
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Maximum items per page
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items skipped before this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}
