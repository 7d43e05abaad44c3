use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AdminDto, CreateAdminDto, LoginDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::admin::NewAdminParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping admin account endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Log an admin in.
///
/// Stores the admin ID in the session. A member login in the same session is
/// left untouched.
///
/// # Access Control
/// - Public - Rate limited per client IP
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session to log the admin into
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - The logged-in admin
/// - `401 Unauthorized` - Invalid email or password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/admin/auth/login",
    operation_id = "admin_login",
    tag = ADMIN_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AdminDto),
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
    let admin = AuthService::new(&state.db)
        .login_admin(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_admin_id(admin.id).await?;

    Ok((StatusCode::OK, Json(admin.into_dto())))
}

/// Log the admin out.
#[utoipa::path(
    post,
    path = "/api/admin/auth/logout",
    operation_id = "admin_logout",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear_admin().await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}

/// Get the logged-in admin.
///
/// # Access Control
/// - `Admin` - Requires an admin session
#[utoipa::path(
    get,
    path = "/api/admin/auth/me",
    operation_id = "get_admin_me",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Current admin", body = AdminDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require_admin().await?;

    Ok((StatusCode::OK, Json(admin.into_dto())))
}

/// Create another admin account.
///
/// # Access Control
/// - `Admin` - Only admins can create admins
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Admin's session for authentication
/// - `payload` - Name, email and password of the new admin
///
/// # Returns
/// - `201 Created` - The new admin
/// - `400 Bad Request` - Invalid data or email already in use
/// - `401 Unauthorized` - Not logged in as admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/admins",
    tag = ADMIN_TAG,
    request_body = CreateAdminDto,
    responses(
        (status = 201, description = "Admin created", body = AdminDto),
        (status = 400, description = "Invalid admin data", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let admin = AuthService::new(&state.db)
        .create_admin(NewAdminParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(admin.into_dto())))
}

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(logout))
        .routes(routes!(get_me))
        .routes(routes!(create_admin))
}

/// Login route, rate limited by the router.
pub fn login_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(login))
}
