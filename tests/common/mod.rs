#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response, StatusCode},
    Router,
};
use chat_service::{config::Config, db, routes, state::AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".into(),
        host: "127.0.0.1".into(),
        port: 0,
        db_max_connections: 1,
        presence_window_minutes: 5,
    }
}

/// Fresh app over an in-memory database with the schema applied.
/// A single pooled connection keeps the in-memory database alive and shared.
pub async fn setup() -> (Router, AppState) {
    let cfg = test_config();
    let pool = db::init_pool(&cfg.database_url, cfg.db_max_connections)
        .await
        .expect("in-memory sqlite pool");
    db::MIGRATOR.run(&pool).await.expect("migrations");

    let state = AppState {
        db: pool,
        config: Arc::new(cfg),
    };

    (routes::router(state.clone()), state)
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };

    builder.body(body).expect("request")
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("infallible service")
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("response body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Register a member and return the `{token, user}` response body
pub async fn register_member(
    app: &Router,
    username: &str,
    full_name: &str,
    password: &str,
) -> Value {
    let resp = send(
        app,
        json_request(
            "POST",
            "/auth/register",
            None,
            Some(json!({
                "username": username,
                "full_name": full_name,
                "password": password,
            })),
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

pub fn token_of(auth_body: &Value) -> String {
    auth_body["token"].as_str().expect("token field").to_string()
}
