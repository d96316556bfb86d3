//! Credential checks and token issue.
//!
//! Email addresses are normalised (trimmed, lowercased) before every lookup,
//! so uniqueness and login are case-insensitive on email and exact on password.

pub mod password;
pub mod queries;
pub mod token;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    CredentialError,

    #[error("Email already exists")]
    Conflict,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),
}

/// Trim and lowercase an email address.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
