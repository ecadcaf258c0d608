//! Playlist catalog queries
//!
//! Membership lives in the `playlist_songs` join table: the primary key on
//! `(playlist_id, song_id)` makes duplicate adds a no-op and `position`
//! preserves insertion order, so a playlist round-trips with its song ids in
//! the order they were added.

use crate::{like_pattern, songs::song_from_row, StorageError};
use serenity_core::types::{Playlist, PlaylistId, Song, SongId, UserId};
use sqlx::{Row, SqlitePool};

type Result<T> = std::result::Result<T, StorageError>;

const PLAYLIST_COLUMNS: &str =
    "id, title, description, cover_art, created_by, created_at, is_public";

fn playlist_from_row(row: &sqlx::sqlite::SqliteRow, songs: Vec<SongId>) -> Playlist {
    Playlist {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        songs,
        cover_art: row.get("cover_art"),
        created_by: row.get("created_by"),
        created_at: row.get("created_at"),
        is_public: row.get::<i64, _>("is_public") != 0,
    }
}

/// Persist a new playlist (membership starts empty)
pub async fn create(pool: &SqlitePool, playlist: &Playlist) -> Result<()> {
    sqlx::query(
        "INSERT INTO playlists (id, title, description, cover_art, created_by, created_at, is_public)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&playlist.id)
    .bind(&playlist.title)
    .bind(&playlist.description)
    .bind(&playlist.cover_art)
    .bind(&playlist.created_by)
    .bind(playlist.created_at)
    .bind(i64::from(playlist.is_public))
    .execute(pool)
    .await?;

    Ok(())
}

/// Get a playlist's member song ids, in insertion order
pub async fn song_ids(pool: &SqlitePool, playlist_id: &PlaylistId) -> Result<Vec<SongId>> {
    let rows = sqlx::query(
        "SELECT song_id FROM playlist_songs WHERE playlist_id = ? ORDER BY position",
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(|r| r.get("song_id")).collect())
}

/// Look up a playlist by id, with its song ids
pub async fn get_by_id(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(&format!(
        "SELECT {PLAYLIST_COLUMNS} FROM playlists WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let songs = song_ids(pool, id).await?;
    Ok(Some(playlist_from_row(&row, songs)))
}

/// Get up to `limit` playlists that are public or owned by `viewer`
pub async fn list_visible(
    pool: &SqlitePool,
    viewer: &UserId,
    limit: i64,
) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(&format!(
        "SELECT {PLAYLIST_COLUMNS} FROM playlists
         WHERE is_public = 1 OR created_by = ?
         LIMIT ?"
    ))
    .bind(viewer)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    let mut playlists = Vec::with_capacity(rows.len());
    for row in rows {
        let id: PlaylistId = row.get("id");
        let songs = song_ids(pool, &id).await?;
        playlists.push(playlist_from_row(&row, songs));
    }

    Ok(playlists)
}

/// Get the member songs of a playlist, in insertion order, up to `limit`
pub async fn member_songs(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    limit: i64,
) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT s.id, s.title, s.artist, s.duration, s.file_data, s.cover_art,
                s.genre, s.uploaded_by, s.created_at
         FROM playlist_songs ps
         INNER JOIN songs s ON ps.song_id = s.id
         WHERE ps.playlist_id = ?
         ORDER BY ps.position
         LIMIT ?",
    )
    .bind(playlist_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

/// Append a song to a playlist.
///
/// A single statement computes the next position and inserts; the join
/// table's primary key turns a duplicate add into a silent no-op.
pub async fn add_song(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    song_id: &SongId,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO playlist_songs (playlist_id, song_id, position)
         SELECT ?, ?, COALESCE(MAX(position), 0) + 1
         FROM playlist_songs WHERE playlist_id = ?
         ON CONFLICT(playlist_id, song_id) DO NOTHING",
    )
    .bind(playlist_id)
    .bind(song_id)
    .bind(playlist_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a song from a playlist; succeeds silently when it is not a member
pub async fn remove_song(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    song_id: &SongId,
) -> Result<()> {
    sqlx::query("DELETE FROM playlist_songs WHERE playlist_id = ? AND song_id = ?")
        .bind(playlist_id)
        .bind(song_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Case-insensitive substring search over title and description, restricted
/// to playlists visible to `viewer`
pub async fn search_visible(
    pool: &SqlitePool,
    query: &str,
    viewer: &UserId,
    limit: i64,
) -> Result<Vec<Playlist>> {
    let pattern = like_pattern(query);

    let rows = sqlx::query(&format!(
        r"
        SELECT {PLAYLIST_COLUMNS} FROM playlists
        WHERE (is_public = 1 OR created_by = ?)
          AND (title LIKE ? ESCAPE '\' OR description LIKE ? ESCAPE '\')
        LIMIT ?
        ",
    ))
    .bind(viewer)
    .bind(&pattern)
    .bind(&pattern)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    let mut playlists = Vec::with_capacity(rows.len());
    for row in rows {
        let id: PlaylistId = row.get("id");
        let songs = song_ids(pool, &id).await?;
        playlists.push(playlist_from_row(&row, songs));
    }

    Ok(playlists)
}

/// Whether any playlist owned by `owner` exists
pub async fn exists_owned_by(pool: &SqlitePool, owner: &UserId) -> Result<bool> {
    let row = sqlx::query("SELECT COUNT(*) as count FROM playlists WHERE created_by = ?")
        .bind(owner)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count") > 0)
}
