//! Song catalog queries

use crate::{like_pattern, StorageError};
use serenity_core::types::{Song, SongId};
use sqlx::{Row, SqlitePool};

type Result<T> = std::result::Result<T, StorageError>;

pub(crate) fn song_from_row(row: &sqlx::sqlite::SqliteRow) -> Song {
    Song {
        id: row.get("id"),
        title: row.get("title"),
        artist: row.get("artist"),
        duration: row.get("duration"),
        file_data: row.get("file_data"),
        cover_art: row.get("cover_art"),
        genre: row.get("genre"),
        uploaded_by: row.get("uploaded_by"),
        created_at: row.get("created_at"),
    }
}

const SONG_COLUMNS: &str =
    "id, title, artist, duration, file_data, cover_art, genre, uploaded_by, created_at";

/// Persist a new song, payload and all
pub async fn create(pool: &SqlitePool, song: &Song) -> Result<()> {
    sqlx::query(
        "INSERT INTO songs (id, title, artist, duration, file_data, cover_art, genre, uploaded_by, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&song.id)
    .bind(&song.title)
    .bind(&song.artist)
    .bind(song.duration)
    .bind(&song.file_data)
    .bind(&song.cover_art)
    .bind(&song.genre)
    .bind(&song.uploaded_by)
    .bind(song.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Look up a song by id
pub async fn get_by_id(pool: &SqlitePool, id: &SongId) -> Result<Option<Song>> {
    let row = sqlx::query(&format!("SELECT {SONG_COLUMNS} FROM songs WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| song_from_row(&r)))
}

/// Get up to `limit` songs, in storage order
pub async fn get_all(pool: &SqlitePool, limit: i64) -> Result<Vec<Song>> {
    let rows = sqlx::query(&format!("SELECT {SONG_COLUMNS} FROM songs LIMIT ?"))
        .bind(limit)
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(song_from_row).collect())
}

/// Case-insensitive substring search over title, artist and genre
pub async fn search(pool: &SqlitePool, query: &str, limit: i64) -> Result<Vec<Song>> {
    let pattern = like_pattern(query);

    let rows = sqlx::query(&format!(
        r"
        SELECT {SONG_COLUMNS} FROM songs
        WHERE title LIKE ? ESCAPE '\'
           OR artist LIKE ? ESCAPE '\'
           OR genre LIKE ? ESCAPE '\'
        LIMIT ?
        ",
    ))
    .bind(&pattern)
    .bind(&pattern)
    .bind(&pattern)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(song_from_row).collect())
}
