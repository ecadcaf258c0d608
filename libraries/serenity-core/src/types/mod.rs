/// Domain types for Serenity
mod ids;
mod playlist;
mod song;
mod user;

pub use ids::{PlaylistId, SongId, UserId};
pub use playlist::{CreatePlaylist, Playlist};
pub use song::{CreateSong, Song};
pub use user::{User, UserProfile};
