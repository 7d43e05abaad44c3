use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::RegisterUserParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping member authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new member account.
///
/// Creates the account and logs the new user in by storing their ID in the session.
///
/// # Access Control
/// - Public - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session the new user is logged into
/// - `payload` - Name, email, password and optional phone
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Missing fields, short password or email already registered
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .register(RegisterUserParams::from_dto(payload))
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log a member in.
///
/// # Access Control
/// - Public - Rate limited per client IP
///
/// # Returns
/// - `200 OK` - The logged-in user
/// - `401 Unauthorized` - Invalid email or password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login_user(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log the member out.
///
/// Only the member login is cleared; an admin login in the same session stays.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear_user().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}

/// Get the logged-in member.
///
/// # Access Control
/// - `User` - Requires a member session
///
/// # Returns
/// - `200 OK` - The current user
/// - `401 Unauthorized` - Not logged in, or the account no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Routes served without the login rate limit.
pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(register))
        .routes(routes!(logout))
        .routes(routes!(get_me))
}

/// Login route, rate limited by the router.
pub fn login_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(login))
}
