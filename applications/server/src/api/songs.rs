/// Songs API routes
use crate::{error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{extract::State, Json};
use serde::Deserialize;
use serenity_core::types::{CreateSong, Song};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSongRequest {
    pub title: String,
    pub artist: String,
    pub duration: i64,
    /// Base64-encoded audio payload, stored verbatim
    pub file_data: String,
    #[serde(default)]
    pub cover_art: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

/// POST /api/songs
/// Upload a song; the payload is stored inline with the metadata
pub async fn upload_song(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<UploadSongRequest>,
) -> Result<Json<Song>> {
    let song = app_state
        .catalog
        .upload_song(CreateSong {
            title: req.title,
            artist: req.artist,
            duration: req.duration,
            file_data: req.file_data,
            cover_art: req.cover_art,
            genre: req.genre,
            uploaded_by: auth.user_id().clone(),
        })
        .await?;
    Ok(Json(song))
}

/// GET /api/songs
/// List songs (cap 100), unfiltered, for any authenticated caller
pub async fn list_songs(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
) -> Result<Json<Vec<Song>>> {
    let songs = app_state.catalog.list_songs().await?;
    Ok(Json(songs))
}
