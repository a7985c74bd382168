/// Registration, login, and token resolution flows.
///
/// Covers the full example flow: register "alice" -> 201 with token T,
/// login with the same credentials -> 200 with the same token T,
/// GET /auth/me with T -> the alice record.
mod common;

use axum::http::StatusCode;
use common::{body_json, json_request, register_member, send, setup, token_of};
use serde_json::json;

#[tokio::test]
async fn register_returns_token_and_user() {
    let (app, _state) = setup().await;

    let body = register_member(&app, "alice", "Alice A", "secret1").await;

    let token = token_of(&body);
    assert_eq!(token.len(), 40);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));

    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["full_name"], "Alice A");
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["user"]["created_at"].is_string());
}

#[tokio::test]
async fn login_returns_the_same_token_as_registration() {
    let (app, _state) = setup().await;

    let registered = register_member(&app, "alice", "Alice A", "secret1").await;

    let resp = send(
        &app,
        json_request(
            "POST",
            "/auth/login",
            None,
            Some(json!({"username": "alice", "password": "secret1"})),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let logged_in = body_json(resp).await;

    assert_eq!(token_of(&registered), token_of(&logged_in));
    assert_eq!(logged_in["user"]["username"], "alice");
}

#[tokio::test]
async fn token_resolves_to_the_registered_member() {
    let (app, _state) = setup().await;

    let body = register_member(&app, "alice", "Alice A", "secret1").await;
    let token = token_of(&body);

    let resp = send(&app, json_request("GET", "/auth/me", Some(&token), None)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let me = body_json(resp).await;
    assert_eq!(me["username"], "alice");
    assert_eq!(me["id"], body["user"]["id"]);
    assert!(me.get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_username_is_rejected_without_creating_a_second_member() {
    let (app, state) = setup().await;

    register_member(&app, "alice", "Alice A", "secret1").await;

    let resp = send(
        &app,
        json_request(
            "POST",
            "/auth/register",
            None,
            Some(json!({"username": "alice", "full_name": "Other Alice", "password": "secret2"})),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE username = 'alice'")
        .fetch_one(&state.db)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn short_password_is_rejected() {
    let (app, _state) = setup().await;

    let resp = send(
        &app,
        json_request(
            "POST",
            "/auth/register",
            None,
            Some(json!({"username": "alice", "full_name": "Alice A", "password": "abc"})),
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_fields_are_rejected_as_bad_request() {
    let (app, _state) = setup().await;

    let resp = send(
        &app,
        json_request(
            "POST",
            "/auth/register",
            None,
            Some(json!({"username": "alice"})),
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_password_and_unknown_user_are_indistinguishable() {
    let (app, _state) = setup().await;

    register_member(&app, "alice", "Alice A", "secret1").await;

    let wrong_password = send(
        &app,
        json_request(
            "POST",
            "/auth/login",
            None,
            Some(json!({"username": "alice", "password": "not-it"})),
        ),
    )
    .await;
    let unknown_user = send(
        &app,
        json_request(
            "POST",
            "/auth/login",
            None,
            Some(json!({"username": "nobody", "password": "whatever"})),
        ),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let a = body_json(wrong_password).await;
    let b = body_json(unknown_user).await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn me_rejects_missing_and_garbage_tokens() {
    let (app, _state) = setup().await;

    let no_header = send(&app, json_request("GET", "/auth/me", None, None)).await;
    assert_eq!(no_header.status(), StatusCode::UNAUTHORIZED);

    let bad_token = send(
        &app,
        json_request("GET", "/auth/me", Some("deadbeef"), None),
    )
    .await;
    assert_eq!(bad_token.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn legacy_token_prefix_is_accepted() {
    let (app, _state) = setup().await;

    let body = register_member(&app, "alice", "Alice A", "secret1").await;
    let token = token_of(&body);

    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/auth/me")
        .header(axum::http::header::AUTHORIZATION, format!("Token {token}"))
        .body(axum::body::Body::empty())
        .unwrap();

    let resp = send(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn hello_is_public() {
    let (app, _state) = setup().await;

    let resp = send(&app, json_request("GET", "/hello", None, None)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Hello!");
    assert!(body["timestamp"].is_string());
}
