//! Notification inbox endpoints.
//!
//! Users and admins each have an inbox under their own prefix. The handlers
//! differ only in which guard resolves the recipient.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        notification::{
            MarkedReadDto, NotificationDto, PaginatedNotificationsDto, SendNotificationDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::notification::{CreateNotificationParams, Recipient},
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Get the user's notifications, newest first.
///
/// The response carries the unread count across all pages.
///
/// # Access Control
/// - `User` - Requires a member session
///
/// # Returns
/// - `200 OK` - Paginated notifications
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved notifications", body = PaginatedNotificationsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let notifications = NotificationService::new(&state.db, Some(&state.hub))
        .get_paginated(Recipient::User(user.id), params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(notifications.into_dto())))
}

/// Mark every notification of the user read.
#[utoipa::path(
    put,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications marked read", body = MarkedReadDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let updated = NotificationService::new(&state.db, Some(&state.hub))
        .mark_all_read(Recipient::User(user.id))
        .await?;

    Ok((StatusCode::OK, Json(MarkedReadDto { updated })))
}

/// Mark one of the user's notifications read.
///
/// # Returns
/// - `200 OK` - The updated notification
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Notification belongs to someone else
/// - `404 Not Found` - Notification not found
#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Notification belongs to someone else", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let notification = NotificationService::new(&state.db, Some(&state.hub))
        .mark_read(Recipient::User(user.id), id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

/// Delete one of the user's notifications.
#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Notification belongs to someone else", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    NotificationService::new(&state.db, Some(&state.hub))
        .delete(Recipient::User(user.id), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the admin's notifications, newest first.
///
/// # Access Control
/// - `Admin` - Requires an admin session
#[utoipa::path(
    get,
    path = "/api/admin/notifications",
    tag = NOTIFICATION_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved notifications", body = PaginatedNotificationsDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_get_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require_admin().await?;

    let notifications = NotificationService::new(&state.db, Some(&state.hub))
        .get_paginated(Recipient::Admin(admin.id), params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(notifications.into_dto())))
}

/// Send a notification to a user.
///
/// The notification is stored and, if the user has a websocket open, pushed
/// to it immediately.
///
/// # Access Control
/// - `Admin` - Only admins can message users
///
/// # Arguments
/// - `state` - Application state containing the database connection and hub
/// - `session` - Admin's session for authentication
/// - `payload` - Target user, title, message and optional type and icon
///
/// # Returns
/// - `201 Created` - The stored notification
/// - `400 Bad Request` - Blank title
/// - `401 Unauthorized` - Not logged in as admin
/// - `404 Not Found` - User not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/notifications",
    tag = NOTIFICATION_TAG,
    request_body = SendNotificationDto,
    responses(
        (status = 201, description = "Notification sent", body = NotificationDto),
        (status = 400, description = "Invalid notification data", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_notification(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SendNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let notification = NotificationService::new(&state.db, Some(&state.hub))
        .send_to_user(CreateNotificationParams::from_send_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications marked read", body = MarkedReadDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_mark_all_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require_admin().await?;

    let updated = NotificationService::new(&state.db, Some(&state.hub))
        .mark_all_read(Recipient::Admin(admin.id))
        .await?;

    Ok((StatusCode::OK, Json(MarkedReadDto { updated })))
}

#[utoipa::path(
    put,
    path = "/api/admin/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 403, description = "Notification belongs to someone else", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_mark_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require_admin().await?;

    let notification = NotificationService::new(&state.db, Some(&state.hub))
        .mark_read(Recipient::Admin(admin.id), id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

/// Delete any notification, including ones addressed to users.
///
/// # Access Control
/// - `Admin` - Admins may delete every notification
#[utoipa::path(
    delete,
    path = "/api/admin/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_delete_notification(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require_admin().await?;

    NotificationService::new(&state.db, Some(&state.hub))
        .delete(Recipient::Admin(admin.id), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_notifications))
        .routes(routes!(mark_all_read))
        .routes(routes!(mark_read))
        .routes(routes!(delete_notification))
        .routes(routes!(admin_get_notifications, send_notification))
        .routes(routes!(admin_mark_all_read))
        .routes(routes!(admin_mark_read))
        .routes(routes!(admin_delete_notification))
}
