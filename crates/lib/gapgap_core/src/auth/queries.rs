//! Auth-related database queries.

use sqlx::PgPool;

use super::AuthError;
use crate::models::auth::User;

/// Check whether an email is already registered.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Create a new user, returning its public profile.
///
/// A unique violation (two concurrent registrations) surfaces as `Conflict`.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    name: &str,
) -> Result<User, AuthError> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, name)
        VALUES ($1, $2, $3)
        RETURNING id, email, name, subscription_plan, created_at
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(name)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => AuthError::Conflict,
        other => AuthError::DbError(other),
    })
}

/// Fetch the user matching both email and password digest.
pub async fn find_user_by_credentials(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
) -> Result<Option<User>, AuthError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, subscription_plan, created_at
        FROM users
        WHERE email = $1 AND password_hash = $2
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}
