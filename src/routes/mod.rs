use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{middleware::auth::require_auth, openapi::ApiDoc, state::AppState};

pub mod auth;
pub mod hello;
pub mod messages;
pub mod presence;
pub mod profile;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/auth/me", get(auth::me))
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route(
            "/messages",
            get(messages::list_messages).post(messages::create_message),
        )
        // Trailing-slash alias kept for clients built against the old API
        .route(
            "/messages/",
            get(messages::list_messages).post(messages::create_message),
        )
        .route("/users/online", get(presence::online_members))
        .route("/users/heartbeat", post(presence::heartbeat))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/hello", get(hello::hello))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/openapi.json", get(openapi_json))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
