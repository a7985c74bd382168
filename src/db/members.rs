/// Member database operations
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::Member;

/// Create a new member. The UNIQUE constraint on `username` is authoritative:
/// a violation maps to `DuplicateUsername` even if a concurrent registration
/// slipped past the `username_exists` pre-check.
pub async fn create(
    pool: &SqlitePool,
    username: &str,
    full_name: &str,
    password_hash: &str,
) -> AppResult<Member> {
    let now = Utc::now();

    let member = sqlx::query_as::<_, Member>(
        r#"
        INSERT INTO members (username, full_name, password_hash, created_at, last_seen)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, username, full_name, password_hash, created_at, last_seen
        "#,
    )
    .bind(username)
    .bind(full_name)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return AppError::DuplicateUsername;
            }
        }
        AppError::from(e)
    })?;

    Ok(member)
}

/// Find member by exact username match
pub async fn find_by_username(pool: &SqlitePool, username: &str) -> AppResult<Option<Member>> {
    let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE username = ?1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(member)
}

pub async fn find_by_id(pool: &SqlitePool, member_id: i64) -> AppResult<Option<Member>> {
    let member = sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?1")
        .bind(member_id)
        .fetch_optional(pool)
        .await?;

    Ok(member)
}

/// Check if username is already taken
pub async fn username_exists(pool: &SqlitePool, username: &str) -> AppResult<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM members WHERE username = ?1)",
    )
    .bind(username)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Update display name and return the fresh row
pub async fn update_full_name(
    pool: &SqlitePool,
    member_id: i64,
    full_name: &str,
) -> AppResult<Member> {
    let member = sqlx::query_as::<_, Member>(
        r#"
        UPDATE members
        SET full_name = ?2
        WHERE id = ?1
        RETURNING id, username, full_name, password_hash, created_at, last_seen
        "#,
    )
    .bind(member_id)
    .bind(full_name)
    .fetch_one(pool)
    .await?;

    Ok(member)
}

/// Record activity: single-row `last_seen` update, called on every
/// authenticated request and on heartbeat. Returns the timestamp written.
pub async fn touch(pool: &SqlitePool, member_id: i64) -> AppResult<DateTime<Utc>> {
    let now = Utc::now();

    sqlx::query("UPDATE members SET last_seen = ?1 WHERE id = ?2")
        .bind(now)
        .bind(member_id)
        .execute(pool)
        .await?;

    Ok(now)
}

/// Members seen at or after `cutoff`, username ascending
pub async fn list_online(pool: &SqlitePool, cutoff: DateTime<Utc>) -> AppResult<Vec<Member>> {
    let members = sqlx::query_as::<_, Member>(
        "SELECT * FROM members WHERE last_seen >= ?1 ORDER BY username ASC",
    )
    .bind(cutoff)
    .fetch_all(pool)
    .await?;

    Ok(members)
}
