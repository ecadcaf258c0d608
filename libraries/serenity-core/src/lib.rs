//! Serenity Core
//!
//! Platform-agnostic domain types and error handling for the Serenity
//! music-streaming backend.
//!
//! This crate defines:
//! - **Domain Types**: `User`, `Song`, `Playlist` and their id newtypes
//! - **Error Handling**: Unified `SerenityError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use serenity_core::types::{CreatePlaylist, Playlist, UserId};
//!
//! let owner = UserId::generate();
//! let playlist = Playlist::create(CreatePlaylist {
//!     title: "Road Trip".to_string(),
//!     description: None,
//!     cover_art: None,
//!     is_public: true,
//!     created_by: owner,
//! });
//! assert!(playlist.songs.is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SerenityError};
pub use types::{
    CreatePlaylist, CreateSong, Playlist, PlaylistId, Song, SongId, User, UserId, UserProfile,
};
