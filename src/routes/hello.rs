use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Unauthenticated liveness greeting
#[utoipa::path(
    get,
    path = "/hello",
    tag = "Health",
    responses(
        (status = 200, description = "Greeting with server time", body = HelloResponse)
    )
)]
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello!".to_string(),
        timestamp: Utc::now(),
    })
}
