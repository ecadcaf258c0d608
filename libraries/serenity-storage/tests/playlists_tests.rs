//! Integration tests for the playlists vertical slice
//!
//! Covers membership ordering, duplicate suppression, visibility filtering
//! and the search query.


use serenity_core::types::PlaylistId;
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "Alice", "alice@example.com").await;
    let playlist = create_test_playlist(pool, "My Favorites", &user.id, true).await;

    let fetched = serenity_storage::playlists::get_by_id(pool, &playlist.id)
        .await
        .unwrap()
        .expect("playlist should exist");

    assert_eq!(fetched.title, "My Favorites");
    assert_eq!(fetched.created_by, user.id);
    assert!(fetched.is_public);
    assert!(fetched.songs.is_empty());
}

#[tokio::test]
async fn test_get_missing_playlist_returns_none() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let result = serenity_storage::playlists::get_by_id(pool, &PlaylistId::new("missing"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_membership_preserves_insertion_order() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "Alice", "alice@example.com").await;
    let playlist = create_test_playlist(pool, "Ordered", &user.id, true).await;

    let song_a = create_test_song(pool, "First", &user.id).await;
    let song_b = create_test_song(pool, "Second", &user.id).await;
    let song_c = create_test_song(pool, "Third", &user.id).await;

    serenity_storage::playlists::add_song(pool, &playlist.id, &song_b.id)
        .await
        .unwrap();
    serenity_storage::playlists::add_song(pool, &playlist.id, &song_a.id)
        .await
        .unwrap();
    serenity_storage::playlists::add_song(pool, &playlist.id, &song_c.id)
        .await
        .unwrap();

    let ids = serenity_storage::playlists::song_ids(pool, &playlist.id)
        .await
        .unwrap();
    assert_eq!(ids, vec![song_b.id.clone(), song_a.id.clone(), song_c.id.clone()]);

    let songs = serenity_storage::playlists::member_songs(pool, &playlist.id, 100)
        .await
        .unwrap();
    let titles: Vec<&str> = songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Second", "First", "Third"]);
}

#[tokio::test]
async fn test_duplicate_add_is_a_noop() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "Alice", "alice@example.com").await;
    let playlist = create_test_playlist(pool, "Dupes", &user.id, true).await;
    let song = create_test_song(pool, "Only Once", &user.id).await;

    serenity_storage::playlists::add_song(pool, &playlist.id, &song.id)
        .await
        .unwrap();
    serenity_storage::playlists::add_song(pool, &playlist.id, &song.id)
        .await
        .unwrap();

    let ids = serenity_storage::playlists::song_ids(pool, &playlist.id)
        .await
        .unwrap();
    assert_eq!(ids.len(), 1);
}

#[tokio::test]
async fn test_remove_absent_song_succeeds() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "Alice", "alice@example.com").await;
    let playlist = create_test_playlist(pool, "Sparse", &user.id, true).await;
    let song = create_test_song(pool, "Present", &user.id).await;
    let absent = create_test_song(pool, "Absent", &user.id).await;

    serenity_storage::playlists::add_song(pool, &playlist.id, &song.id)
        .await
        .unwrap();

    serenity_storage::playlists::remove_song(pool, &playlist.id, &absent.id)
        .await
        .unwrap();

    let ids = serenity_storage::playlists::song_ids(pool, &playlist.id)
        .await
        .unwrap();
    assert_eq!(ids, vec![song.id.clone()]);
}

#[tokio::test]
async fn test_remove_then_add_appends_at_end() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "Alice", "alice@example.com").await;
    let playlist = create_test_playlist(pool, "Churn", &user.id, true).await;

    let song_a = create_test_song(pool, "A", &user.id).await;
    let song_b = create_test_song(pool, "B", &user.id).await;

    serenity_storage::playlists::add_song(pool, &playlist.id, &song_a.id)
        .await
        .unwrap();
    serenity_storage::playlists::add_song(pool, &playlist.id, &song_b.id)
        .await
        .unwrap();
    serenity_storage::playlists::remove_song(pool, &playlist.id, &song_a.id)
        .await
        .unwrap();
    serenity_storage::playlists::add_song(pool, &playlist.id, &song_a.id)
        .await
        .unwrap();

    let ids = serenity_storage::playlists::song_ids(pool, &playlist.id)
        .await
        .unwrap();
    assert_eq!(ids, vec![song_b.id.clone(), song_a.id.clone()]);
}

#[tokio::test]
async fn test_list_visible_filters_private_playlists() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "Alice", "alice@example.com").await;
    let bob = create_test_user(pool, "Bob", "bob@example.com").await;

    create_test_playlist(pool, "Alice Public", &alice.id, true).await;
    create_test_playlist(pool, "Alice Private", &alice.id, false).await;
    create_test_playlist(pool, "Bob Private", &bob.id, false).await;

    let visible = serenity_storage::playlists::list_visible(pool, &alice.id, 100)
        .await
        .unwrap();
    let titles: Vec<&str> = visible.iter().map(|p| p.title.as_str()).collect();

    assert!(titles.contains(&"Alice Public"));
    assert!(titles.contains(&"Alice Private"));
    assert!(!titles.contains(&"Bob Private"));
}

#[tokio::test]
async fn test_search_visible_matches_title_and_description() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "Alice", "alice@example.com").await;
    let bob = create_test_user(pool, "Bob", "bob@example.com").await;

    create_test_playlist(pool, "Workout Mix", &alice.id, true).await;
    // Private playlist of another user must never surface in search
    create_test_playlist(pool, "Bob Workout", &bob.id, false).await;

    let hits = serenity_storage::playlists::search_visible(pool, "workout", &alice.id, 20)
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Workout Mix");

    // Owner sees their own private playlist
    let bob_hits = serenity_storage::playlists::search_visible(pool, "workout", &bob.id, 20)
        .await
        .unwrap();
    assert_eq!(bob_hits.len(), 2);
}
