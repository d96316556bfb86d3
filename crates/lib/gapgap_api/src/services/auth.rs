//! Authentication service: register/login flows delegating to `gapgap_core::auth`.

use gapgap_core::auth::password::hash_password;
use gapgap_core::auth::token::generate_token;
use gapgap_core::auth::{AuthError, normalize_email, queries};
use sqlx::PgPool;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::AuthResponse;

/// Register a new user account.
///
/// Fails with a validation error if any field is blank and with a conflict if
/// the normalised email is taken.
pub async fn register(
    pool: &PgPool,
    email: &str,
    password: &str,
    name: &str,
) -> AppResult<AuthResponse> {
    let email = normalize_email(email);
    let name = name.trim();

    if email.is_empty() || password.is_empty() || name.is_empty() {
        return Err(AppError::Validation(
            "Email, password and name required".into(),
        ));
    }

    if queries::email_exists(pool, &email).await? {
        debug!(%email, "registration rejected, email taken");
        return Err(AuthError::Conflict.into());
    }

    let user = queries::create_user(pool, &email, &hash_password(password), name).await?;
    info!(user_id = %user.id, "user registered");

    Ok(AuthResponse {
        user,
        token: generate_token(),
    })
}

/// Authenticate with email + password.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> AppResult<AuthResponse> {
    let email = normalize_email(email);

    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation("Email and password required".into()));
    }

    let user = queries::find_user_by_credentials(pool, &email, &hash_password(password))
        .await?
        .ok_or(AuthError::CredentialError)?;
    debug!(user_id = %user.id, "user logged in");

    Ok(AuthResponse {
        user,
        token: generate_token(),
    })
}
