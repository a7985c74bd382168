/// Registration, login, and current-user handlers
use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    db,
    error::{AppError, ErrorResponse},
    extract::ValidatedJson,
    models::member::{LoginRequest, RegisterRequest},
    models::{Member, MemberPublic},
    security::password,
    state::AppState,
};

/// Token plus user payload returned by register and login
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: MemberPublic,
}

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Member registered", body = AuthResponse),
        (status = 400, description = "Validation failure or duplicate username", body = ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    if db::members::username_exists(&state.db, &payload.username).await? {
        return Err(AppError::DuplicateUsername);
    }

    let password_hash = password::hash_password(&payload.password)?;
    let member =
        db::members::create(&state.db, &payload.username, &payload.full_name, &password_hash)
            .await?;

    tracing::info!(member_id = member.id, username = %member.username, "member registered");

    let token = db::tokens::get_or_create(&state.db, member.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: token.key,
            user: member.into(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; token is the same key issued at registration", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    // Unknown username and wrong password take the same exit so responses
    // cannot be used to enumerate usernames
    let member = db::members::find_by_username(&state.db, &payload.username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    password::verify_password(&payload.password, &member.password_hash)?;

    let token = db::tokens::get_or_create(&state.db, member.id).await?;

    Ok(Json(AuthResponse {
        token: token.key,
        user: member.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Current authenticated member", body = MemberPublic),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    )
)]
pub async fn me(Extension(member): Extension<Member>) -> Json<MemberPublic> {
    Json(member.into())
}
