//! Song types

use crate::error::{Result, SongbookError};
use serde::{Deserialize, Serialize};

/// Song identifier, assigned by the store on insert
pub type SongId = i64;

/// A song in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Store-assigned identifier
    pub id: SongId,
    /// Performing group or artist
    #[serde(rename = "groupName")]
    pub group_name: String,
    /// Track title
    #[serde(rename = "songName")]
    pub song_name: String,
    /// Release date, kept as opaque text
    #[serde(rename = "dateRelease")]
    pub release_date: String,
    /// Full lyric text, verses separated by a blank line
    pub text: String,
    /// External reference URL
    pub link: String,
}

/// Metadata returned by the lookup service for a (group, song) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDetails {
    /// Release date as reported upstream
    pub release_date: String,
    /// Full lyric text
    pub text: String,
    /// External reference URL
    pub link: String,
}

/// Request to add a song; the rest of the record comes from enrichment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSong {
    /// Performing group or artist
    #[serde(default)]
    pub group: String,
    /// Track title
    #[serde(default)]
    pub song: String,
}

impl CreateSong {
    /// Create a new request
    pub fn new(group: impl Into<String>, song: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            song: song.into(),
        }
    }

    /// Reject blank group or song names
    pub fn validate(&self) -> Result<()> {
        require_non_blank("group", &self.group)?;
        require_non_blank("song", &self.song)
    }
}

/// A fully enriched song that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    /// Performing group or artist
    pub group_name: String,
    /// Track title
    pub song_name: String,
    /// Release date, opaque text
    pub release_date: String,
    /// Full lyric text
    pub text: String,
    /// External reference URL
    pub link: String,
}

impl NewSong {
    /// Combine a create request with the metadata fetched for it
    pub fn enriched(request: CreateSong, details: SongDetails) -> Self {
        Self {
            group_name: request.group,
            song_name: request.song,
            release_date: details.release_date,
            text: details.text,
            link: details.link,
        }
    }
}

/// Replacement payload for every mutable field of a song
///
/// Any `id` in the incoming JSON is ignored; the target is always the id
/// the caller addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSong {
    /// Performing group or artist
    #[serde(default, rename = "groupName")]
    pub group_name: String,
    /// Track title
    #[serde(default, rename = "songName")]
    pub song_name: String,
    /// Release date, opaque text
    #[serde(default, rename = "dateRelease")]
    pub release_date: String,
    /// Full lyric text
    #[serde(default)]
    pub text: String,
    /// External reference URL
    #[serde(default)]
    pub link: String,
}

impl UpdateSong {
    /// Reject blank group or song names
    pub fn validate(&self) -> Result<()> {
        require_non_blank("groupName", &self.group_name)?;
        require_non_blank("songName", &self.song_name)
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SongbookError::validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_serializes_with_catalog_field_names() {
        let song = Song {
            id: 7,
            group_name: "Muse".to_string(),
            song_name: "Supremacy".to_string(),
            release_date: "16.07.2006".to_string(),
            text: "a\n\nb".to_string(),
            link: "https://example.com".to_string(),
        };

        let json = serde_json::to_value(&song).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["groupName"], "Muse");
        assert_eq!(json["songName"], "Supremacy");
        assert_eq!(json["dateRelease"], "16.07.2006");
        assert_eq!(json["text"], "a\n\nb");
        assert_eq!(json["link"], "https://example.com");
    }

    #[test]
    fn details_parse_lookup_payload() {
        let details: SongDetails = serde_json::from_str(
            r#"{"releaseDate":"16.07.2006","text":"Ooh baby","link":"https://youtu.be/x"}"#,
        )
        .unwrap();
        assert_eq!(details.release_date, "16.07.2006");
        assert_eq!(details.text, "Ooh baby");
        assert_eq!(details.link, "https://youtu.be/x");
    }

    #[test]
    fn create_song_rejects_blank_names() {
        assert!(CreateSong::new("Muse", "Supremacy").validate().is_ok());
        assert!(matches!(
            CreateSong::new("", "Supremacy").validate(),
            Err(SongbookError::Validation(_))
        ));
        assert!(matches!(
            CreateSong::new("Muse", "   ").validate(),
            Err(SongbookError::Validation(_))
        ));
    }

    #[test]
    fn missing_create_fields_default_to_empty() {
        let request: CreateSong = serde_json::from_str(r#"{"group":"Muse"}"#).unwrap();
        assert_eq!(request.song, "");
        assert!(request.validate().is_err());
    }

    #[test]
    fn update_ignores_payload_id() {
        let update: UpdateSong = serde_json::from_str(
            r#"{"id":99,"groupName":"Muse","songName":"Uprising","dateRelease":"2009","text":"t","link":"l"}"#,
        )
        .unwrap();
        assert_eq!(update.group_name, "Muse");
        assert_eq!(update.song_name, "Uprising");
        assert!(update.validate().is_ok());
    }

    #[test]
    fn enriched_song_takes_names_from_request() {
        let new_song = NewSong::enriched(
            CreateSong::new("Muse", "Supremacy"),
            SongDetails {
                release_date: "2012".to_string(),
                text: "verse".to_string(),
                link: "link".to_string(),
            },
        );
        assert_eq!(new_song.group_name, "Muse");
        assert_eq!(new_song.song_name, "Supremacy");
        assert_eq!(new_song.release_date, "2012");
    }
}
