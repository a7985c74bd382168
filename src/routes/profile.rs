/// Profile read/update handlers
use axum::{extract::State, Extension, Json};

use crate::{
    db,
    error::{AppError, ErrorResponse},
    extract::ValidatedJson,
    models::member::UpdateProfileRequest,
    models::{Member, MemberPublic},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "Current member profile", body = MemberPublic),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    )
)]
pub async fn get_profile(Extension(member): Extension<Member>) -> Json<MemberPublic> {
    Json(member.into())
}

#[utoipa::path(
    put,
    path = "/profile",
    tag = "Profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile; only full_name is mutable", body = MemberPublic),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(member): Extension<Member>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<MemberPublic>, AppError> {
    let member = match payload.full_name {
        Some(full_name) => db::members::update_full_name(&state.db, member.id, &full_name).await?,
        None => member,
    };

    Ok(Json(member.into()))
}
