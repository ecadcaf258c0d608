/// User profile API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{extract::State, Json};
use serenity_core::types::UserProfile;

/// GET /api/user/profile
/// Public view of the authenticated user
pub async fn profile(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<UserProfile>> {
    let user = serenity_storage::users::get_by_id(&app_state.pool, auth.user_id())
        .await?
        .ok_or_else(|| ServerError::Auth("User no longer exists".to_string()))?;

    Ok(Json(user.into()))
}
