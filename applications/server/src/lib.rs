//! Serenity Server Library
//!
//! Minimal multi-user music-streaming backend: JWT authentication, inline
//! song uploads, playlist management and search over a `SQLite` store.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{auth::AuthService, catalog::CatalogService};
pub use state::AppState;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router.
///
/// Everything is nested under `/api`; register, login and health are the
/// only routes that skip the bearer-token middleware.
pub fn create_router(app_state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        // Playlists
        .route("/playlists", get(api::playlists::list_playlists))
        .route("/playlists", post(api::playlists::create_playlist))
        .route(
            "/playlists/:id/songs",
            get(api::playlists::list_playlist_songs),
        )
        .route(
            "/playlists/:id/songs/:song_id",
            post(api::playlists::add_song_to_playlist),
        )
        .route(
            "/playlists/:id/songs/:song_id",
            delete(api::playlists::remove_song_from_playlist),
        )
        // Songs
        .route("/songs", post(api::songs::upload_song))
        .route("/songs", get(api::songs::list_songs))
        // Search
        .route("/search", get(api::search::search))
        // Profile
        .route("/user/profile", get(api::users::profile))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            middleware::auth_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
