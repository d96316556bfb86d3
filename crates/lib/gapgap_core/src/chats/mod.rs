//! Chat and message persistence, and the send flow.
//!
//! A chat belongs to one user and holds messages ordered by creation time.
//! Messages are only written in pairs by [`send::send_message`]: the user's
//! turn and the model's reply commit together or not at all.

pub mod queries;
pub mod send;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Number of messages handed to the completion provider.
///
/// The window is the *oldest* messages of the chat, not the most recent ones.
pub const CONTEXT_WINDOW_LIMIT: i64 = 20;

/// Errors from chat operations.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Completion failed: {0}")]
    Completion(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl ChatError {
    /// Map a foreign-key violation to `NotFound(what)`, keep anything else.
    pub(crate) fn missing_parent(e: sqlx::Error, what: &str) -> Self {
        match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                ChatError::NotFound(what.to_string())
            }
            other => ChatError::Db(other),
        }
    }
}

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Row returned by chat queries.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ChatRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row returned by message queries.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MessageRow {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub role: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
