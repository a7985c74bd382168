/// Presence handlers: the online-members window query and explicit heartbeat
use axum::{extract::State, Extension, Json};
use chrono::{Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    db,
    error::{AppError, ErrorResponse},
    models::{Member, MemberPublic},
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct HeartbeatResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/users/online",
    tag = "Presence",
    responses(
        (status = 200, description = "Members active within the presence window, username ascending", body = [MemberPublic]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    )
)]
pub async fn online_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<MemberPublic>>, AppError> {
    let cutoff = Utc::now() - Duration::minutes(state.config.presence_window_minutes);
    let members = db::members::list_online(&state.db, cutoff).await?;

    Ok(Json(members.into_iter().map(MemberPublic::from).collect()))
}

#[utoipa::path(
    post,
    path = "/users/heartbeat",
    tag = "Presence",
    responses(
        (status = 200, description = "last_seen refreshed", body = HeartbeatResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    )
)]
pub async fn heartbeat(
    State(state): State<AppState>,
    Extension(member): Extension<Member>,
) -> Result<Json<HeartbeatResponse>, AppError> {
    db::members::touch(&state.db, member.id).await?;

    Ok(Json(HeartbeatResponse {
        status: "online".to_string(),
    }))
}
