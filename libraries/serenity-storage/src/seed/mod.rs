//! Startup seed data
//!
//! Inserts four public demo playlists the first time the server starts
//! against an empty database. The playlists are owned by the sentinel
//! `system` user id, which is also how a later startup detects that seeding
//! already happened.

use crate::{playlists, StorageError};
use serenity_core::types::{CreatePlaylist, Playlist, UserId};
use sqlx::SqlitePool;

type Result<T> = std::result::Result<T, StorageError>;

/// Demo album covers shown for the seeded playlists
const DEMO_COVERS: [&str; 4] = [
    "https://images.unsplash.com/photo-1644855640845-ab57a047320e?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzd8MHwxfHNlYXJjaHwxfHxtdXNpYyUyMGFsYnVtJTIwY292ZXJ8ZW58MHx8fHwxNzU5Mzg5OTEyfDA&ixlib=rb-4.1.0&q=85",
    "https://images.unsplash.com/photo-1496208612508-eb52fba7d94e?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzV8MHwxfHNlYXJjaHwxfHxlbGVjdHJvbmljJTIwZGFuY2UlMjBtdXNpY3xlbnwwfHx8fDE3NTkzODk5MTd8MA&ixlib=rb-4.1.0&q=85",
    "https://images.unsplash.com/photo-1609316116970-dbfd288439d3?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzV8MHwxfHNlYXJjaHwyfHxlbGVjdHJvbmljJTIwZGFuY2UlMjBtdXNpY3xlbnwwfHx8fDE3NTkzODk5MTd8MA&ixlib=rb-4.1.0&q=85",
    "https://images.unsplash.com/photo-1629923759854-156b88c433aa?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzd8MHwxfHNlYXJjaHwyfHxtdXNpYyUyMGFsYnVtJTIwY292ZXJ8ZW58MHx8fHwxNzU5Mzg5OTEyfDA&ixlib=rb-4.1.0&q=85",
];

const DEMO_PLAYLISTS: [(&str, &str); 4] = [
    ("Dance", "High-energy dance tracks to get you moving"),
    ("Mood", "Chill vibes for relaxing moments"),
    ("Party", "Party anthems and crowd favorites"),
    ("Chill", "Laid-back tracks for peaceful moments"),
];

/// Seed the demo playlists if no system-owned playlist exists yet.
///
/// Idempotent: a second startup against the same database performs no
/// writes. Returns the number of playlists inserted.
pub async fn seed_demo_playlists(pool: &SqlitePool) -> Result<usize> {
    let system = UserId::system();

    if playlists::exists_owned_by(pool, &system).await? {
        tracing::debug!("Demo playlists already seeded, skipping");
        return Ok(0);
    }

    for ((title, description), cover) in DEMO_PLAYLISTS.iter().zip(DEMO_COVERS.iter()) {
        let playlist = Playlist::create(CreatePlaylist {
            title: (*title).to_string(),
            description: Some((*description).to_string()),
            cover_art: Some((*cover).to_string()),
            is_public: true,
            created_by: system.clone(),
        });
        playlists::create(pool, &playlist).await?;
    }

    tracing::info!("Seeded {} demo playlists", DEMO_PLAYLISTS.len());
    Ok(DEMO_PLAYLISTS.len())
}
