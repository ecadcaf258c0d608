/// Authentication API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serenity_core::types::{User, UserId, UserProfile};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

impl TokenResponse {
    fn bearer(access_token: String, user: UserProfile) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user,
        }
    }
}

/// POST /api/auth/register
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>> {
    // Check if the email is taken
    if serenity_storage::users::email_exists(&app_state.pool, &req.email).await? {
        return Err(ServerError::Conflict("Email already registered".to_string()));
    }

    // Hash password and persist the user
    let password_hash = app_state.auth_service.hash_password(&req.password)?;
    let user = User {
        id: UserId::generate(),
        name: req.name,
        email: req.email,
        password_hash,
        created_at: Utc::now(),
    };

    // A concurrent registration can still lose the race; the unique index on
    // email is the authoritative check.
    serenity_storage::users::create(&app_state.pool, &user)
        .await
        .map_err(|e| match e {
            serenity_storage::StorageError::Duplicate(_) => {
                ServerError::Conflict("Email already registered".to_string())
            }
            other => other.into(),
        })?;

    let access_token = app_state.auth_service.create_token(&user.email)?;

    Ok(Json(TokenResponse::bearer(access_token, user.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    let user = serenity_storage::users::get_by_email(&app_state.pool, &req.email)
        .await?
        .ok_or_else(|| ServerError::Auth("Incorrect email or password".to_string()))?;

    // Verify password
    if !app_state
        .auth_service
        .verify_password(&req.password, &user.password_hash)?
    {
        return Err(ServerError::Auth("Incorrect email or password".to_string()));
    }

    let access_token = app_state.auth_service.create_token(&user.email)?;

    Ok(Json(TokenResponse::bearer(access_token, user.into())))
}
