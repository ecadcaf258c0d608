/// Playlists API routes
use crate::{error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serenity_core::types::{CreatePlaylist, Playlist, PlaylistId, Song, SongId};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_art: Option<String>,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
}

fn default_is_public() -> bool {
    true
}

/// GET /api/playlists
/// List playlists that are public or owned by the authenticated user
pub async fn list_playlists(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Vec<Playlist>>> {
    let playlists = app_state.catalog.list_playlists(auth.user_id()).await?;
    Ok(Json(playlists))
}

/// POST /api/playlists
/// Create a new playlist with an empty song list
pub async fn create_playlist(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<Json<Playlist>> {
    let playlist = app_state
        .catalog
        .create_playlist(CreatePlaylist {
            title: req.title,
            description: req.description,
            cover_art: req.cover_art,
            is_public: req.is_public,
            created_by: auth.user_id().clone(),
        })
        .await?;
    Ok(Json(playlist))
}

/// GET /api/playlists/:id/songs
/// List a playlist's songs, in insertion order
pub async fn list_playlist_songs(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Vec<Song>>> {
    let playlist_id = PlaylistId::new(id);
    let songs = app_state
        .catalog
        .playlist_songs(&playlist_id, auth.user_id())
        .await?;
    Ok(Json(songs))
}

/// POST /api/playlists/:id/songs/:song_id
/// Add a song to a playlist (owner only; duplicate adds are a no-op)
pub async fn add_song_to_playlist(
    Path((id, song_id)): Path<(String, String)>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<serde_json::Value>> {
    let playlist_id = PlaylistId::new(id);
    let song_id = SongId::new(song_id);

    app_state
        .catalog
        .add_song_to_playlist(&playlist_id, &song_id, auth.user_id())
        .await?;

    Ok(Json(serde_json::json!({ "message": "Song added to playlist" })))
}

/// DELETE /api/playlists/:id/songs/:song_id
/// Remove a song from a playlist (owner only; absent songs succeed silently)
pub async fn remove_song_from_playlist(
    Path((id, song_id)): Path<(String, String)>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<serde_json::Value>> {
    let playlist_id = PlaylistId::new(id);
    let song_id = SongId::new(song_id);

    app_state
        .catalog
        .remove_song_from_playlist(&playlist_id, &song_id, auth.user_id())
        .await?;

    Ok(Json(serde_json::json!({ "message": "Song removed from playlist" })))
}
