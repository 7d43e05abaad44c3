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
        membership::{MembershipDto, MembershipRequestDto, PaginatedMembershipsDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::membership::MembershipParams,
        service::membership::MembershipService, state::AppState,
    },
};

pub static MEMBERSHIP_TAG: &str = "membership";

/// Get paginated active memberships.
#[utoipa::path(
    get,
    path = "/api/memberships",
    tag = MEMBERSHIP_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved memberships", body = PaginatedMembershipsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_memberships(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let memberships = MembershipService::new(&state.db)
        .get_paginated(true, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(memberships.into_dto())))
}

/// Get an active membership by ID.
///
/// # Returns
/// - `200 OK` - Membership details
/// - `404 Not Found` - Membership doesn't exist or is inactive
#[utoipa::path(
    get,
    path = "/api/memberships/{id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("id" = i32, Path, description = "Membership ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved membership", body = MembershipDto),
        (status = 404, description = "Membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_membership(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let membership = MembershipService::new(&state.db)
        .get_by_id(id, true)
        .await?
        .ok_or_else(|| AppError::NotFound("Membership not found".to_string()))?;

    Ok((StatusCode::OK, Json(membership.into_dto())))
}

/// Get paginated memberships of every status.
///
/// # Access Control
/// - `Admin` - Only admins can see inactive memberships
#[utoipa::path(
    get,
    path = "/api/admin/memberships",
    tag = MEMBERSHIP_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved memberships", body = PaginatedMembershipsDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_get_memberships(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let memberships = MembershipService::new(&state.db)
        .get_paginated(false, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(memberships.into_dto())))
}

/// Create a new membership.
///
/// # Access Control
/// - `Admin` - Only admins can create memberships
///
/// # Returns
/// - `201 Created` - Successfully created membership
/// - `400 Bad Request` - Invalid membership data
/// - `401 Unauthorized` - Not logged in as admin
#[utoipa::path(
    post,
    path = "/api/admin/memberships",
    tag = MEMBERSHIP_TAG,
    request_body = MembershipRequestDto,
    responses(
        (status = 201, description = "Successfully created membership", body = MembershipDto),
        (status = 400, description = "Invalid membership data", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_membership(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MembershipRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let membership = MembershipService::new(&state.db)
        .create(MembershipParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(membership.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/memberships/{id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("id" = i32, Path, description = "Membership ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved membership", body = MembershipDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_get_membership(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let membership = MembershipService::new(&state.db)
        .get_by_id(id, false)
        .await?
        .ok_or_else(|| AppError::NotFound("Membership not found".to_string()))?;

    Ok((StatusCode::OK, Json(membership.into_dto())))
}

/// Replace a membership's details.
///
/// # Returns
/// - `200 OK` - Successfully updated membership
/// - `400 Bad Request` - Invalid membership data
/// - `401 Unauthorized` - Not logged in as admin
/// - `404 Not Found` - Membership not found
#[utoipa::path(
    put,
    path = "/api/admin/memberships/{id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("id" = i32, Path, description = "Membership ID")
    ),
    request_body = MembershipRequestDto,
    responses(
        (status = 200, description = "Successfully updated membership", body = MembershipDto),
        (status = 400, description = "Invalid membership data", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_membership(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<MembershipRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let membership = MembershipService::new(&state.db)
        .update(id, MembershipParams::from_dto(payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Membership not found".to_string()))?;

    Ok((StatusCode::OK, Json(membership.into_dto())))
}

/// Delete a membership.
#[utoipa::path(
    delete,
    path = "/api/admin/memberships/{id}",
    tag = MEMBERSHIP_TAG,
    params(
        ("id" = i32, Path, description = "Membership ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted membership"),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_membership(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    if MembershipService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Membership not found".to_string()))
    }
}

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_memberships))
        .routes(routes!(get_membership))
        .routes(routes!(admin_get_memberships, create_membership))
        .routes(routes!(admin_get_membership, update_membership, delete_membership))
}
