//! Chat and message queries.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use super::{CONTEXT_WINDOW_LIMIT, ChatError, ChatRow, MessageRow, Role};
use crate::completion::ChatTurn;
use crate::uuid::uuidv7;

/// List chats for a user, most recently updated first.
pub async fn list_chats(pool: &PgPool, user_id: &Uuid) -> Result<Vec<ChatRow>, ChatError> {
    let rows = sqlx::query_as::<_, ChatRow>(
        r#"
        SELECT id, user_id, title, created_at, updated_at
        FROM chats
        WHERE user_id = $1
        ORDER BY updated_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Create an untitled chat owned by `user_id`.
pub async fn create_chat(pool: &PgPool, user_id: &Uuid) -> Result<ChatRow, ChatError> {
    sqlx::query_as::<_, ChatRow>(
        r#"
        INSERT INTO chats (id, user_id)
        VALUES ($1, $2)
        RETURNING id, user_id, title, created_at, updated_at
        "#,
    )
    .bind(uuidv7())
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(|e| ChatError::missing_parent(e, "User not found"))
}

/// List every message of a chat in creation order.
pub async fn list_messages(pool: &PgPool, chat_id: &Uuid) -> Result<Vec<MessageRow>, ChatError> {
    let rows = sqlx::query_as::<_, MessageRow>(
        r#"
        SELECT id, chat_id, role, content, created_at
        FROM messages
        WHERE chat_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(chat_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Insert one message.
pub async fn insert_message(
    conn: &mut PgConnection,
    chat_id: &Uuid,
    role: Role,
    content: &str,
) -> Result<MessageRow, ChatError> {
    sqlx::query_as::<_, MessageRow>(
        r#"
        INSERT INTO messages (id, chat_id, role, content)
        VALUES ($1, $2, $3, $4)
        RETURNING id, chat_id, role, content, created_at
        "#,
    )
    .bind(uuidv7())
    .bind(chat_id)
    .bind(role.as_str())
    .bind(content)
    .fetch_one(conn)
    .await
    .map_err(|e| ChatError::missing_parent(e, "Chat not found"))
}

/// The oldest [`CONTEXT_WINDOW_LIMIT`] messages of a chat as model turns.
pub async fn context_window(
    conn: &mut PgConnection,
    chat_id: &Uuid,
) -> Result<Vec<ChatTurn>, ChatError> {
    let rows = sqlx::query_as::<_, (String, String)>(
        r#"
        SELECT role, content
        FROM messages
        WHERE chat_id = $1
        ORDER BY created_at ASC, id ASC
        LIMIT $2
        "#,
    )
    .bind(chat_id)
    .bind(CONTEXT_WINDOW_LIMIT)
    .fetch_all(conn)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(role, content)| ChatTurn { role, content })
        .collect())
}

/// Bump a chat's `updated_at` to the current wall-clock time.
pub async fn touch_chat(conn: &mut PgConnection, chat_id: &Uuid) -> Result<(), ChatError> {
    sqlx::query("UPDATE chats SET updated_at = clock_timestamp() WHERE id = $1")
        .bind(chat_id)
        .execute(conn)
        .await?;
    Ok(())
}
