/// Search API routes
use crate::{error::Result, middleware::AuthenticatedUser, services::SearchResults, state::AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// GET /api/search?q=
/// Case-insensitive substring search over songs and visible playlists
pub async fn search(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResults>> {
    let results = app_state.catalog.search(&query.q, auth.user_id()).await?;
    Ok(Json(results))
}
