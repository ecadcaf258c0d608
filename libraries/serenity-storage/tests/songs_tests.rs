//! Integration tests for the songs vertical slice


use serenity_core::types::{CreateSong, Song, SongId};
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_song() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "Alice", "alice@example.com").await;
    let song = create_test_song(pool, "Midnight Drive", &user.id).await;

    let fetched = serenity_storage::songs::get_by_id(pool, &song.id)
        .await
        .unwrap()
        .expect("song should exist");

    assert_eq!(fetched.title, "Midnight Drive");
    assert_eq!(fetched.uploaded_by, user.id);
    // Payload round-trips verbatim
    assert_eq!(fetched.file_data, song.file_data);
}

#[tokio::test]
async fn test_get_missing_song_returns_none() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let result = serenity_storage::songs::get_by_id(pool, &SongId::new("missing"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_all_respects_limit() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "Alice", "alice@example.com").await;
    for i in 0..5 {
        create_test_song(pool, &format!("Song {i}"), &user.id).await;
    }

    let all = serenity_storage::songs::get_all(pool, 100).await.unwrap();
    assert_eq!(all.len(), 5);

    let capped = serenity_storage::songs::get_all(pool, 3).await.unwrap();
    assert_eq!(capped.len(), 3);
}

#[tokio::test]
async fn test_search_matches_title_artist_and_genre() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "Alice", "alice@example.com").await;

    let by_title = Song::create(CreateSong {
        title: "Summer Nights".to_string(),
        artist: "The Locals".to_string(),
        duration: 200,
        file_data: "AAAA".to_string(),
        cover_art: None,
        genre: None,
        uploaded_by: user.id.clone(),
    });
    serenity_storage::songs::create(pool, &by_title).await.unwrap();

    let by_artist = Song::create(CreateSong {
        title: "Untitled".to_string(),
        artist: "Summer Collective".to_string(),
        duration: 150,
        file_data: "AAAA".to_string(),
        cover_art: None,
        genre: None,
        uploaded_by: user.id.clone(),
    });
    serenity_storage::songs::create(pool, &by_artist).await.unwrap();

    let by_genre = Song::create(CreateSong {
        title: "Track Three".to_string(),
        artist: "Someone Else".to_string(),
        duration: 90,
        file_data: "AAAA".to_string(),
        cover_art: None,
        genre: Some("summer-pop".to_string()),
        uploaded_by: user.id.clone(),
    });
    serenity_storage::songs::create(pool, &by_genre).await.unwrap();

    let unrelated = create_test_song(pool, "Winter Song", &user.id).await;

    // Case-insensitive substring across all three fields
    let hits = serenity_storage::songs::search(pool, "SUMMER", 50).await.unwrap();
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|s| s.id != unrelated.id));
}

#[tokio::test]
async fn test_search_escapes_like_wildcards() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "Alice", "alice@example.com").await;
    create_test_song(pool, "100% Pure", &user.id).await;
    create_test_song(pool, "100 Proof", &user.id).await;

    // "%" must match literally, not as a wildcard
    let hits = serenity_storage::songs::search(pool, "100%", 50).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "100% Pure");
}
