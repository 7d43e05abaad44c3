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
        api::{ErrorDto, MessageDto, PaginationParams},
        order::{
            AdminOrderQuery, CreateOrderDto, OrderDto, PaginatedOrdersDto, UpdateOrderStatusDto,
            VerifyOrderDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::order::PlaceOrderParams,
        service::order::OrderService, state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order for a class, program or membership.
///
/// The order starts `pending` with the item's current name and price. A
/// verification code is emailed to the user; the order is confirmed by posting
/// that code to the verify endpoint.
///
/// # Access Control
/// - `User` - Requires a member session
///
/// # Arguments
/// - `state` - Application state containing the database connection, mailer and hub
/// - `session` - User's session for authentication
/// - `payload` - Item kind and ID to order
///
/// # Returns
/// - `201 Created` - The pending order
/// - `400 Bad Request` - Item is inactive
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Item doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed, awaiting OTP", body = OrderDto),
        (status = 400, description = "Item is not available", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let order = OrderService::new(&state.db, &state.mailer, Some(&state.hub))
        .create(PlaceOrderParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Get the logged-in user's orders, newest first.
///
/// # Access Control
/// - `User` - Requires a member session
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = PaginatedOrdersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let orders = OrderService::new(&state.db, &state.mailer, Some(&state.hub))
        .get_paginated_for_user(user.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

/// Confirm a pending order with its OTP code.
///
/// On success the user and every admin are notified.
///
/// # Access Control
/// - `User` - Only the user who placed the order
///
/// # Returns
/// - `200 OK` - The confirmed order
/// - `400 Bad Request` - Order is not pending, or the code is invalid or expired
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such order for this user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/orders/{id}/verify",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = VerifyOrderDto,
    responses(
        (status = 200, description = "Order confirmed", body = OrderDto),
        (status = 400, description = "Order not pending or invalid OTP", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<VerifyOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let order = OrderService::new(&state.db, &state.mailer, Some(&state.hub))
        .verify(user.id, id, &payload.code)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Email a fresh OTP code for a pending order.
///
/// # Access Control
/// - `User` - Only the user who placed the order
///
/// # Returns
/// - `200 OK` - Code sent
/// - `400 Bad Request` - Order is not pending
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such order for this user
/// - `429 Too Many Requests` - Previous code sent less than 60 seconds ago
#[utoipa::path(
    post,
    path = "/api/orders/{id}/resend-otp",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "OTP sent", body = MessageDto),
        (status = 400, description = "Order not pending", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 429, description = "Cooldown active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resend_order_otp(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    OrderService::new(&state.db, &state.mailer, Some(&state.hub))
        .resend_otp(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("OTP sent"))))
}

/// Get all orders, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can see every user's orders
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Admin's session for authentication
/// - `query` - Pagination and optional status filter
///
/// # Returns
/// - `200 OK` - Paginated list of orders
/// - `401 Unauthorized` - Not logged in as admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = ORDER_TAG,
    params(AdminOrderQuery),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = PaginatedOrdersDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_get_orders(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AdminOrderQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let orders = OrderService::new(&state.db, &state.mailer, Some(&state.hub))
        .get_paginated(query.status, query.page, query.entries)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

/// Set an order's status.
///
/// Moving an order to `confirmed` counts it towards revenue; any other status
/// removes it.
///
/// # Access Control
/// - `Admin` - Only admins can override order status
#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}/status",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order status updated", body = OrderDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let order = OrderService::new(&state.db, &state.mailer, Some(&state.hub))
        .update_status(id, payload.status)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_my_orders, create_order))
        .routes(routes!(verify_order))
        .routes(routes!(resend_order_otp))
        .routes(routes!(admin_get_orders))
        .routes(routes!(update_order_status))
}
