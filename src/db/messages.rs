/// Message store: append-only, listed oldest first
use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::message::Message;
use crate::models::MessageRecord;

pub async fn create(pool: &SqlitePool, author_id: i64, text: &str) -> AppResult<Message> {
    let message = sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (author_id, text, created_at)
        VALUES (?1, ?2, ?3)
        RETURNING id, author_id, text, created_at
        "#,
    )
    .bind(author_id)
    .bind(text)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(message)
}

/// All messages with their author summary, ascending `created_at`.
/// `id` breaks ties so insertion order stays stable for equal timestamps.
pub async fn list(pool: &SqlitePool) -> AppResult<Vec<MessageRecord>> {
    let messages = sqlx::query_as::<_, MessageRecord>(
        r#"
        SELECT
            m.id,
            m.text,
            m.created_at,
            a.id AS author_id,
            a.username AS author_username,
            a.full_name AS author_full_name
        FROM messages m
        JOIN members a ON a.id = m.author_id
        ORDER BY m.created_at ASC, m.id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(messages)
}
