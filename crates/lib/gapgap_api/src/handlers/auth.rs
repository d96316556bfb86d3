//! Authentication request handler.
//!
//! One endpoint, dispatched on the body's `action`: `register` or `login`.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_body;
use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{AuthRequest, AuthResponse};
use crate::services::auth;

/// `POST /auth`: register (201) or log in (200).
pub async fn auth_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let req: AuthRequest = parse_body(&body)?;
    let email = req.email.as_deref().unwrap_or_default();
    let password = req.password.as_deref().unwrap_or_default();

    match req.action.as_deref() {
        Some("register") => {
            let name = req.name.as_deref().unwrap_or_default();
            let resp = auth::register(&state.pool, email, password, name).await?;
            Ok((StatusCode::CREATED, Json(resp)))
        }
        Some("login") => {
            let resp = auth::login(&state.pool, email, password).await?;
            Ok((StatusCode::OK, Json(resp)))
        }
        _ => Err(AppError::InvalidAction),
    }
}

/// Any method other than `POST` (or the `OPTIONS` preflight).
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
