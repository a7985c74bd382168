use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Bare message row as inserted
#[derive(Debug, Clone, FromRow)]
pub struct Message {
    pub id: i64,
    pub author_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Flat author-joined projection returned by the message listing query
#[derive(Debug, Clone, FromRow)]
pub struct MessageRecord {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
    pub author_username: String,
    pub author_full_name: String,
}

/// Author summary embedded in message responses (credential-free)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageAuthor {
    pub id: i64,
    pub username: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageDto {
    pub id: i64,
    pub author: MessageAuthor,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<MessageRecord> for MessageDto {
    fn from(rec: MessageRecord) -> Self {
        Self {
            id: rec.id,
            author: MessageAuthor {
                id: rec.author_id,
                username: rec.author_username,
                full_name: rec.author_full_name,
            },
            text: rec.text,
            created_at: rec.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMessageRequest {
    #[validate(length(min = 1))]
    pub text: String,
}
