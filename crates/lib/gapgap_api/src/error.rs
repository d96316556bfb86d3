//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gapgap_core::auth::AuthError;
use gapgap_core::chats::ChatError;
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid action")]
    InvalidAction,

    #[error("OpenAI error: {0}")]
    Upstream(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidAction => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Upstream(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(m)
            | AppError::Conflict(m)
            | AppError::Unauthorized(m)
            | AppError::NotFound(m)
            | AppError::Config(m) => m.clone(),
            AppError::MethodNotAllowed => "Method not allowed".into(),
            AppError::InvalidAction => "Invalid action".into(),
            AppError::Upstream(m) => format!("OpenAI error: {m}"),
            AppError::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(detail) = &self {
            error!(%detail, "request failed");
        }
        let body = Json(ErrorResponse {
            error: self.message(),
        });
        (self.status(), body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("row not found".into()),
            _ => AppError::Internal(e.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::CredentialError => {
                AppError::Unauthorized("Invalid email or password".into())
            }
            AuthError::Conflict => AppError::Conflict("Email already exists".into()),
            AuthError::ValidationError(msg) => AppError::Validation(msg),
            AuthError::DbError(e) => AppError::from(e),
        }
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::NotFound(msg) => AppError::NotFound(msg),
            ChatError::Completion(msg) => AppError::Upstream(msg),
            ChatError::Db(e) => AppError::from(e),
        }
    }
}
