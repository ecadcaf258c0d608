//! User credential store queries

use crate::StorageError;
use serenity_core::types::{User, UserId};
use sqlx::{Row, SqlitePool};

type Result<T> = std::result::Result<T, StorageError>;

fn user_from_row(row: &sqlx::sqlite::SqliteRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
    }
}

/// Persist a new user record.
///
/// Fails with [`StorageError::Duplicate`] when the email is already taken;
/// the unique index on `email` is the authoritative check.
pub async fn create(pool: &SqlitePool, user: &User) -> Result<()> {
    sqlx::query(
        "INSERT INTO users (id, name, email, password_hash, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.created_at)
    .execute(pool)
    .await
    .map_err(|e| {
        if StorageError::is_unique_violation(&e) {
            StorageError::Duplicate(user.email.clone())
        } else {
            StorageError::Database(e)
        }
    })?;

    Ok(())
}

/// Look up a user by email (the login key)
pub async fn get_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let row = sqlx::query(
        "SELECT id, name, email, password_hash, created_at FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| user_from_row(&r)))
}

/// Look up a user by id
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row =
        sqlx::query("SELECT id, name, email, password_hash, created_at FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(|r| user_from_row(&r)))
}

/// Check whether an email is already registered
pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool> {
    let row = sqlx::query("SELECT COUNT(*) as count FROM users WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count") > 0)
}

/// Get all users, ordered by name
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query(
        "SELECT id, name, email, password_hash, created_at FROM users ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(user_from_row).collect())
}
