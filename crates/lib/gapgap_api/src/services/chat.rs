//! Chat service: listing, creation and the send flow.

use gapgap_core::chats::queries;
use gapgap_core::chats::send::send_message;
use gapgap_core::completion::CompletionProvider;
use gapgap_core::uuid::parse_id;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{ChatListing, CreatedChat, SendMessageResponse};

/// Parse a required id field, naming it in the error.
pub fn require_id(raw: Option<&str>, field: &str) -> AppResult<Uuid> {
    let raw = raw
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Validation(format!("{field} required")))?;
    parse_id(raw).ok_or_else(|| AppError::Validation(format!("Invalid {field}")))
}

/// A user's chats, or the messages of `chat_id` when one is given.
pub async fn list(pool: &PgPool, user_id: &Uuid, chat_id: Option<&Uuid>) -> AppResult<ChatListing> {
    match chat_id {
        Some(chat_id) => {
            let messages = queries::list_messages(pool, chat_id).await?;
            Ok(ChatListing::Messages { messages })
        }
        None => {
            let chats = queries::list_chats(pool, user_id).await?;
            Ok(ChatListing::Chats { chats })
        }
    }
}

/// Create an untitled chat.
pub async fn create(pool: &PgPool, user_id: &Uuid) -> AppResult<CreatedChat> {
    let chat = queries::create_chat(pool, user_id).await?;
    info!(chat_id = %chat.id, %user_id, "chat created");
    Ok(chat.into())
}

/// Send a user message and return both recorded turns.
pub async fn send(
    pool: &PgPool,
    provider: &dyn CompletionProvider,
    chat_id: &Uuid,
    message: &str,
) -> AppResult<SendMessageResponse> {
    let exchange = send_message(pool, provider, chat_id, message).await?;
    Ok(SendMessageResponse {
        user_message: exchange.user_message.into(),
        assistant_message: exchange.assistant_message.into(),
    })
}
