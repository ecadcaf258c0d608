//! Integration tests for startup seeding


use serenity_core::types::UserId;
use test_helpers::*;

#[tokio::test]
async fn test_seed_inserts_four_public_playlists() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let inserted = serenity_storage::seed::seed_demo_playlists(pool)
        .await
        .unwrap();
    assert_eq!(inserted, 4);

    let playlists = serenity_storage::playlists::list_visible(pool, &UserId::generate(), 100)
        .await
        .unwrap();
    let mut titles: Vec<&str> = playlists.iter().map(|p| p.title.as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["Chill", "Dance", "Mood", "Party"]);

    for playlist in &playlists {
        assert!(playlist.is_public);
        assert!(playlist.songs.is_empty());
        assert_eq!(playlist.created_by, UserId::system());
        assert!(playlist.description.is_some());
        assert!(playlist.cover_art.is_some());
    }
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    assert_eq!(
        serenity_storage::seed::seed_demo_playlists(pool).await.unwrap(),
        4
    );
    assert_eq!(
        serenity_storage::seed::seed_demo_playlists(pool).await.unwrap(),
        0
    );

    let playlists = serenity_storage::playlists::list_visible(pool, &UserId::generate(), 100)
        .await
        .unwrap();
    assert_eq!(playlists.len(), 4);
}

#[tokio::test]
async fn test_seed_skips_when_system_playlists_exist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    // A pre-existing system playlist counts as "already seeded"
    create_test_playlist(pool, "Legacy", &UserId::system(), true).await;

    let inserted = serenity_storage::seed::seed_demo_playlists(pool)
        .await
        .unwrap();
    assert_eq!(inserted, 0);
}
