use chrono::{DateTime, Utc};
/// Member model and auth/profile request types
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full member row. Deliberately not `Serialize`: `password_hash` must never
/// reach a response body, so external views go through [`MemberPublic`].
#[derive(Debug, Clone, FromRow)]
pub struct Member {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

/// Credential-free projection used in every user-facing response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MemberPublic {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl From<Member> for MemberPublic {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            username: member.username,
            full_name: member.full_name,
            created_at: member.created_at,
            last_seen: member.last_seen,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// PUT /profile body; an absent `full_name` leaves the profile untouched
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,
}
