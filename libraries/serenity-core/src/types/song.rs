/// Song domain types
use super::ids::{SongId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded song.
///
/// The audio payload is stored inline as an opaque base64 string alongside
/// the metadata; the server never decodes or streams it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Duration in seconds
    pub duration: i64,

    /// Base64-encoded audio payload (opaque)
    pub file_data: String,

    /// Base64-encoded cover image or image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,

    /// Genre label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Id of the uploading user
    pub uploaded_by: UserId,

    /// Upload timestamp
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating a new song
#[derive(Debug, Clone)]
pub struct CreateSong {
    pub title: String,
    pub artist: String,
    pub duration: i64,
    pub file_data: String,
    pub cover_art: Option<String>,
    pub genre: Option<String>,
    pub uploaded_by: UserId,
}

impl Song {
    /// Build a new song record with a generated id and current timestamp
    pub fn create(params: CreateSong) -> Self {
        Self {
            id: SongId::generate(),
            title: params.title,
            artist: params.artist,
            duration: params.duration,
            file_data: params.file_data,
            cover_art: params.cover_art,
            genre: params.genre,
            uploaded_by: params.uploaded_by,
            created_at: Utc::now(),
        }
    }
}
