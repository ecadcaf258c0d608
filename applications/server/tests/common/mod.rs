/// Common test utilities and fixtures
use serenity_server::{services::AuthService, state::AppState};
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_JWT_SECRET: &str = "test-secret-key";

/// Create a test database with migrations applied.
///
/// Uses a real SQLite file so every pool connection sees the same data.
pub async fn create_test_pool() -> (SqlitePool, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = serenity_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    serenity_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    (pool, temp_dir)
}

/// Build the full application router over a fresh seeded database
pub async fn create_test_app() -> (axum::Router, AppState, TempDir) {
    let (pool, temp_dir) = create_test_pool().await;

    serenity_storage::seed::seed_demo_playlists(&pool)
        .await
        .expect("Failed to seed demo playlists");

    let auth_service = Arc::new(AuthService::new(TEST_JWT_SECRET.to_string(), 30));
    let app_state = AppState::new(pool, auth_service);
    let app = serenity_server::create_router(app_state.clone());

    (app, app_state, temp_dir)
}
