//! Serenity Storage
//!
//! `SQLite` persistence layer for the Serenity backend.
//!
//! A playlist's ordered song-id list is stored as a `playlist_songs` join
//! table whose primary key suppresses duplicates and whose `position`
//! column preserves insertion order.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each feature owns its own queries (`users`,
//!   `songs`, `playlists`, `seed`)
//! - **Stateless**: every read goes back to the database; nothing is cached
//!   in process
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create database connection and apply schema
//! let pool = serenity_storage::create_pool("sqlite://serenity.db").await?;
//! serenity_storage::run_migrations(&pool).await?;
//!
//! let songs = serenity_storage::songs::get_all(&pool, 100).await?;
//! # Ok(())
//! # }
//! ```

mod error;

// Vertical slices
pub mod playlists;
pub mod seed;
pub mod songs;
pub mod users;

pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://serenity.db`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool created for {}", database_url);

    Ok(pool)
}

/// Build a `LIKE` pattern matching `query` as a case-insensitive substring.
///
/// `%` and `_` in the query are escaped so they match literally; queries must
/// be bound alongside `ESCAPE '\'`.
pub(crate) fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
