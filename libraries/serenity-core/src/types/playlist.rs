/// Playlist domain types
use super::ids::{PlaylistId, SongId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playlist referencing songs by id.
///
/// `songs` is insertion-ordered and never contains the same id twice.
/// Private playlists are visible and mutable only by their creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist title (not unique)
    pub title: String,

    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Member song ids, in insertion order
    pub songs: Vec<SongId>,

    /// Cover image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,

    /// Id of the creating user (`system` for seeded playlists)
    pub created_by: UserId,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Whether non-owners may view this playlist
    pub is_public: bool,
}

/// Parameters for creating a new playlist
#[derive(Debug, Clone)]
pub struct CreatePlaylist {
    pub title: String,
    pub description: Option<String>,
    pub cover_art: Option<String>,
    pub is_public: bool,
    pub created_by: UserId,
}

impl Playlist {
    /// Build a new empty playlist with a generated id and current timestamp
    pub fn create(params: CreatePlaylist) -> Self {
        Self {
            id: PlaylistId::generate(),
            title: params.title,
            description: params.description,
            songs: Vec::new(),
            cover_art: params.cover_art,
            created_by: params.created_by,
            created_at: Utc::now(),
            is_public: params.is_public,
        }
    }

    /// Whether `viewer` may read this playlist's contents
    pub fn visible_to(&self, viewer: &UserId) -> bool {
        self.is_public || self.created_by == *viewer
    }

    /// Whether `requester` may mutate this playlist's membership
    pub fn owned_by(&self, requester: &UserId) -> bool {
        self.created_by == *requester
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn private_playlist(owner: &UserId) -> Playlist {
        Playlist::create(CreatePlaylist {
            title: "Late Night".to_string(),
            description: None,
            cover_art: None,
            is_public: false,
            created_by: owner.clone(),
        })
    }

    #[test]
    fn new_playlist_has_empty_song_list() {
        let playlist = private_playlist(&UserId::generate());
        assert!(playlist.songs.is_empty());
    }

    #[test]
    fn private_playlist_visible_only_to_owner() {
        let owner = UserId::generate();
        let playlist = private_playlist(&owner);

        assert!(playlist.visible_to(&owner));
        assert!(!playlist.visible_to(&UserId::generate()));
    }

    #[test]
    fn public_playlist_visible_to_everyone() {
        let mut playlist = private_playlist(&UserId::generate());
        playlist.is_public = true;

        assert!(playlist.visible_to(&UserId::generate()));
    }

    #[test]
    fn only_owner_may_mutate() {
        let owner = UserId::generate();
        let playlist = private_playlist(&owner);

        assert!(playlist.owned_by(&owner));
        assert!(!playlist.owned_by(&UserId::generate()));
    }
}
