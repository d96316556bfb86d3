//! Request and response bodies.
//!
//! Top-level keys are camelCase; entity fields keep their stored snake_case names.

use chrono::{DateTime, Utc};
use gapgap_core::chats::{ChatRow, MessageRow};
use gapgap_core::models::auth::User;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `POST /auth`. Absent fields read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthRequest {
    pub action: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Successful register/login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Query string of `GET /chat`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatQuery {
    pub user_id: Option<String>,
    pub chat_id: Option<String>,
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatRequest {
    pub action: Option<String>,
    pub user_id: Option<String>,
    pub chat_id: Option<String>,
    pub message: Option<String>,
}

/// `GET /chat` result: a user's chats, or one chat's messages.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChatListing {
    Chats { chats: Vec<ChatRow> },
    Messages { messages: Vec<MessageRow> },
}

/// Chat as returned by `create`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedChat {
    pub id: Uuid,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ChatRow> for CreatedChat {
    fn from(row: ChatRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateChatResponse {
    pub chat: CreatedChat,
}

/// One message of a send exchange.
#[derive(Debug, Clone, Serialize)]
pub struct MessageView {
    pub id: Uuid,
    pub role: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<MessageRow> for MessageView {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            role: row.role,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub user_message: MessageView,
    pub assistant_message: MessageView,
}
