//! The send flow: user turn, completion, assistant turn, one transaction.

use sqlx::PgPool;
use tracing::{debug, error, warn};
use uuid::Uuid;

use super::queries::{context_window, insert_message, touch_chat};
use super::{ChatError, MessageRow, Role};
use crate::completion::{CompletionError, CompletionProvider, CompletionRequest};

/// Both turns written by a successful send.
#[derive(Debug, Clone)]
pub struct SentExchange {
    pub user_message: MessageRow,
    pub assistant_message: MessageRow,
}

/// Record `content` as a user turn, ask the provider for a reply and record it.
///
/// Everything happens on one transaction. If the provider fails the
/// transaction is rolled back, so the user turn is not kept either.
pub async fn send_message(
    pool: &PgPool,
    provider: &dyn CompletionProvider,
    chat_id: &Uuid,
    content: &str,
) -> Result<SentExchange, ChatError> {
    let mut tx = pool.begin().await?;

    let user_message = insert_message(&mut *tx, chat_id, Role::User, content).await?;
    let window = context_window(&mut *tx, chat_id).await?;
    debug!(%chat_id, turns = window.len(), "requesting completion");

    let reply = match provider.complete(&CompletionRequest::new(window)).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(%chat_id, error = %e, "completion failed, rolling back");
            let rollback = tx.rollback().await;
            return Err(completion_failed(chat_id, e, rollback));
        }
    };

    let assistant_message = insert_message(&mut *tx, chat_id, Role::Assistant, &reply).await?;
    touch_chat(&mut *tx, chat_id).await?;
    tx.commit().await?;

    Ok(SentExchange {
        user_message,
        assistant_message,
    })
}

/// The error reported for a failed completion. A failed rollback is only
/// logged: the connection discards the open transaction either way.
fn completion_failed(
    chat_id: &Uuid,
    cause: CompletionError,
    rollback: Result<(), sqlx::Error>,
) -> ChatError {
    if let Err(e) = rollback {
        error!(%chat_id, error = %e, "rollback failed");
    }
    ChatError::Completion(cause.to_string())
}
