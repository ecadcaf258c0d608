/// Catalog service - business rules over the song/playlist store
///
/// Ownership and visibility checks live here; the storage slices underneath
/// stay mechanical. Every call re-fetches from the store, so the service
/// holds no state beyond the pool handle.
use crate::error::{Result, ServerError};
use serde::Serialize;
use serenity_core::types::{
    CreatePlaylist, CreateSong, Playlist, PlaylistId, Song, SongId, UserId,
};
use serenity_storage::{playlists, songs};
use sqlx::SqlitePool;

/// Fixed cap on list endpoints
const MAX_LIST_RESULTS: i64 = 100;
/// Fixed cap on song search hits
const MAX_SONG_HITS: i64 = 50;
/// Fixed cap on playlist search hits
const MAX_PLAYLIST_HITS: i64 = 20;

/// Combined search result
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub songs: Vec<Song>,
    pub playlists: Vec<Playlist>,
}

#[derive(Debug, Clone)]
pub struct CatalogService {
    pool: SqlitePool,
}

impl CatalogService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a playlist with an empty song list. Titles are not unique;
    /// this always succeeds.
    pub async fn create_playlist(&self, params: CreatePlaylist) -> Result<Playlist> {
        let playlist = Playlist::create(params);
        playlists::create(&self.pool, &playlist).await?;
        Ok(playlist)
    }

    /// List playlists that are public or owned by `viewer`
    pub async fn list_playlists(&self, viewer: &UserId) -> Result<Vec<Playlist>> {
        Ok(playlists::list_visible(&self.pool, viewer, MAX_LIST_RESULTS).await?)
    }

    /// List a playlist's songs, in insertion order.
    ///
    /// Fails `NotFound` for a missing playlist and `Forbidden` when a
    /// non-owner asks for a private one.
    pub async fn playlist_songs(
        &self,
        playlist_id: &PlaylistId,
        viewer: &UserId,
    ) -> Result<Vec<Song>> {
        let playlist = self.require_playlist(playlist_id).await?;

        if !playlist.visible_to(viewer) {
            return Err(ServerError::Forbidden("Access denied".to_string()));
        }

        Ok(playlists::member_songs(&self.pool, playlist_id, MAX_LIST_RESULTS).await?)
    }

    /// Store an uploaded song, payload verbatim
    pub async fn upload_song(&self, params: CreateSong) -> Result<Song> {
        if params.duration < 0 {
            return Err(ServerError::BadRequest(
                "Duration must not be negative".to_string(),
            ));
        }

        let song = Song::create(params);
        songs::create(&self.pool, &song).await?;
        Ok(song)
    }

    /// List songs, unfiltered, up to the fixed cap
    pub async fn list_songs(&self) -> Result<Vec<Song>> {
        Ok(songs::get_all(&self.pool, MAX_LIST_RESULTS).await?)
    }

    /// Append a song to a playlist the requester owns.
    ///
    /// Adding a song that is already a member is a silent success.
    pub async fn add_song_to_playlist(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
        requester: &UserId,
    ) -> Result<()> {
        let playlist = self.require_playlist(playlist_id).await?;

        if !playlist.owned_by(requester) {
            return Err(ServerError::Forbidden("Access denied".to_string()));
        }

        if songs::get_by_id(&self.pool, song_id).await?.is_none() {
            return Err(ServerError::NotFound("Song not found".to_string()));
        }

        playlists::add_song(&self.pool, playlist_id, song_id).await?;
        Ok(())
    }

    /// Remove a song from a playlist the requester owns.
    ///
    /// Removing a song that is not a member is a silent success.
    pub async fn remove_song_from_playlist(
        &self,
        playlist_id: &PlaylistId,
        song_id: &SongId,
        requester: &UserId,
    ) -> Result<()> {
        let playlist = self.require_playlist(playlist_id).await?;

        if !playlist.owned_by(requester) {
            return Err(ServerError::Forbidden("Access denied".to_string()));
        }

        playlists::remove_song(&self.pool, playlist_id, song_id).await?;
        Ok(())
    }

    /// Case-insensitive substring search over songs (title/artist/genre) and
    /// the playlists visible to `viewer` (title/description)
    pub async fn search(&self, query: &str, viewer: &UserId) -> Result<SearchResults> {
        let songs = songs::search(&self.pool, query, MAX_SONG_HITS).await?;
        let playlists =
            playlists::search_visible(&self.pool, query, viewer, MAX_PLAYLIST_HITS).await?;

        Ok(SearchResults { songs, playlists })
    }

    async fn require_playlist(&self, playlist_id: &PlaylistId) -> Result<Playlist> {
        playlists::get_by_id(&self.pool, playlist_id)
            .await?
            .ok_or_else(|| ServerError::NotFound("Playlist not found".to_string()))
    }
}
