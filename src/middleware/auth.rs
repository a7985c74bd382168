use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{db, error::AppError, state::AppState};

/// Middleware guarding every authenticated route: resolves the bearer token
/// to its member, refreshes presence, and stashes the member in request
/// extensions for handlers to pick up via `Extension<Member>`.
///
/// Any authenticated call counts as activity, so casual API usage keeps a
/// member online without explicit heartbeats.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::InvalidToken)?;

    // "Token <key>" is the legacy prefix some clients still send
    let key = auth_header
        .strip_prefix("Bearer ")
        .or_else(|| auth_header.strip_prefix("Token "))
        .ok_or(AppError::InvalidToken)?;

    let token = db::tokens::find_by_key(&state.db, key)
        .await?
        .ok_or(AppError::InvalidToken)?;

    let mut member = db::members::find_by_id(&state.db, token.member_id)
        .await?
        .ok_or_else(|| {
            // A token without its member is an integrity problem an operator
            // should see; the client only gets a generic 401.
            tracing::warn!(member_id = token.member_id, "token resolves to a missing member");
            AppError::MemberNotFound
        })?;

    member.last_seen = db::members::touch(&state.db, member.id).await?;
    req.extensions_mut().insert(member);

    Ok(next.run(req).await)
}
