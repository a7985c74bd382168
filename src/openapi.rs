/// OpenAPI documentation for the chat service
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::member::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::models::message::CreateMessageRequest;
use crate::models::{MemberPublic, MessageAuthor, MessageDto};
use crate::routes::auth::AuthResponse;
use crate::routes::hello::HelloResponse;
use crate::routes::presence::HeartbeatResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chat Service API",
        version = "1.0.0",
        description = "Member registration, token auth, messages, and presence",
        license(name = "MIT")
    ),
    paths(
        crate::routes::hello::hello,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::me,
        crate::routes::profile::get_profile,
        crate::routes::profile::update_profile,
        crate::routes::messages::list_messages,
        crate::routes::messages::create_message,
        crate::routes::presence::online_members,
        crate::routes::presence::heartbeat,
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        UpdateProfileRequest,
        CreateMessageRequest,
        AuthResponse,
        MemberPublic,
        MessageAuthor,
        MessageDto,
        HeartbeatResponse,
        HelloResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Health", description = "Unauthenticated liveness"),
        (name = "Auth", description = "Registration, login, and token identity"),
        (name = "Profile", description = "Member profile management"),
        (name = "Messages", description = "Chat message log"),
        (name = "Presence", description = "Online members and heartbeat"),
    )
)]
pub struct ApiDoc;
