/// Token persistence: one live token per member, issued on demand
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::error::AppResult;
use crate::security::token;

#[derive(Debug, Clone, FromRow)]
pub struct AuthToken {
    pub key: String,
    pub member_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Idempotent issuance. The UNIQUE constraint on `member_id` makes the
/// insert-then-select safe under concurrent first logins: at most one of the
/// competing inserts lands, everyone reads back the surviving row.
pub async fn get_or_create(pool: &SqlitePool, member_id: i64) -> AppResult<AuthToken> {
    let key = token::generate_key();

    sqlx::query(
        r#"
        INSERT INTO auth_tokens (key, member_id, created_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT (member_id) DO NOTHING
        "#,
    )
    .bind(&key)
    .bind(member_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    let token = sqlx::query_as::<_, AuthToken>(
        "SELECT key, member_id, created_at FROM auth_tokens WHERE member_id = ?1",
    )
    .bind(member_id)
    .fetch_one(pool)
    .await?;

    Ok(token)
}

pub async fn find_by_key(pool: &SqlitePool, key: &str) -> AppResult<Option<AuthToken>> {
    let token = sqlx::query_as::<_, AuthToken>(
        "SELECT key, member_id, created_at FROM auth_tokens WHERE key = ?1",
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;

    Ok(token)
}
