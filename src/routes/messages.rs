/// Message listing and posting handlers
use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::{
    db,
    error::{AppError, ErrorResponse},
    extract::ValidatedJson,
    models::message::CreateMessageRequest,
    models::{Member, MessageAuthor, MessageDto},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/messages",
    tag = "Messages",
    responses(
        (status = 200, description = "All messages, oldest first, with author summaries", body = [MessageDto]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    )
)]
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageDto>>, AppError> {
    let records = db::messages::list(&state.db).await?;

    Ok(Json(records.into_iter().map(MessageDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/messages",
    tag = "Messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message created", body = MessageDto),
        (status = 400, description = "Empty or missing text", body = ErrorResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    )
)]
pub async fn create_message(
    State(state): State<AppState>,
    Extension(member): Extension<Member>,
    ValidatedJson(payload): ValidatedJson<CreateMessageRequest>,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    let message = db::messages::create(&state.db, member.id, &payload.text).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            id: message.id,
            author: MessageAuthor {
                id: member.id,
                username: member.username,
                full_name: member.full_name,
            },
            text: message.text,
            created_at: message.created_at,
        }),
    ))
}
