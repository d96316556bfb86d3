//! Chat request handlers.
//!
//! Every method checks that a completion provider is configured before doing
//! anything else, so a missing API key is reported even on reads.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::debug;

use super::parse_body;
use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatListing, ChatQuery, ChatRequest, CreateChatResponse};
use crate::services::chat::{self, require_id};

/// `GET /chat?userId=&chatId=`: list chats, or a chat's messages.
///
/// axum routes `HEAD` here too; it is refused like any other method.
pub async fn list_handler(
    State(state): State<AppState>,
    method: Method,
    query: Result<Query<ChatQuery>, QueryRejection>,
) -> AppResult<Json<ChatListing>> {
    state.completion()?;
    if method != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }
    let Query(params) = query.map_err(|e| AppError::Validation(e.body_text()))?;

    let user_id = require_id(params.user_id.as_deref(), "userId")?;
    let chat_id = match params.chat_id.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(raw) => Some(require_id(Some(raw), "chatId")?),
        None => None,
    };

    let listing = chat::list(&state.pool, &user_id, chat_id.as_ref()).await?;
    Ok(Json(listing))
}

/// `POST /chat`: `create` a chat or `send` a message (the default action).
pub async fn post_handler(State(state): State<AppState>, body: Bytes) -> AppResult<Response> {
    let provider = state.completion()?;
    let req: ChatRequest = parse_body(&body)?;

    if req.user_id.as_deref().is_none_or(|v| v.trim().is_empty()) {
        return Err(AppError::Validation("userId required".into()));
    }

    match req.action.as_deref().unwrap_or("send") {
        "create" => {
            let user_id = require_id(req.user_id.as_deref(), "userId")?;
            let chat = chat::create(&state.pool, &user_id).await?;
            Ok((StatusCode::CREATED, Json(CreateChatResponse { chat })).into_response())
        }
        "send" => {
            let message = req.message.as_deref().unwrap_or_default().trim();
            let chat_id = req.chat_id.as_deref().filter(|v| !v.trim().is_empty());
            let Some(chat_id) = chat_id.filter(|_| !message.is_empty()) else {
                return Err(AppError::Validation("chatId and message required".into()));
            };
            let chat_id = require_id(Some(chat_id), "chatId")?;

            debug!(%chat_id, "sending message");
            let resp = chat::send(&state.pool, provider.as_ref(), &chat_id, message).await?;
            Ok(Json(resp).into_response())
        }
        _ => Err(AppError::InvalidAction),
    }
}

/// Any method other than `GET`/`POST` (or the `OPTIONS` preflight).
pub async fn method_not_allowed(State(state): State<AppState>) -> AppError {
    match state.completion() {
        Ok(_) => AppError::MethodNotAllowed,
        Err(e) => e,
    }
}
