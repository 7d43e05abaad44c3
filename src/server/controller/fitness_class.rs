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
        fitness_class::{ClassDto, ClassRequestDto, PaginatedClassesDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::fitness_class::ClassParams,
        service::fitness_class::FitnessClassService, state::AppState,
    },
};

pub static CLASS_TAG: &str = "class";

/// Get paginated active classes.
#[utoipa::path(
    get,
    path = "/api/classes",
    tag = CLASS_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved classes", body = PaginatedClassesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classes(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let classes = FitnessClassService::new(&state.db)
        .get_paginated(true, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(classes.into_dto())))
}

/// Get an active class by ID.
///
/// # Returns
/// - `200 OK` - Class details
/// - `404 Not Found` - Class doesn't exist or is inactive
#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    tag = CLASS_TAG,
    params(
        ("id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved class", body = ClassDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let class = FitnessClassService::new(&state.db)
        .get_by_id(id, true)
        .await?
        .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

/// Get paginated classes of every status.
///
/// # Access Control
/// - `Admin` - Only admins can see inactive classes
#[utoipa::path(
    get,
    path = "/api/admin/classes",
    tag = CLASS_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved classes", body = PaginatedClassesDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_get_classes(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let classes = FitnessClassService::new(&state.db)
        .get_paginated(false, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(classes.into_dto())))
}

/// Create a new class.
///
/// # Access Control
/// - `Admin` - Only admins can create classes
///
/// # Returns
/// - `201 Created` - Successfully created class
/// - `400 Bad Request` - Invalid class data or unknown trainer
/// - `401 Unauthorized` - Not logged in as admin
#[utoipa::path(
    post,
    path = "/api/admin/classes",
    tag = CLASS_TAG,
    request_body = ClassRequestDto,
    responses(
        (status = 201, description = "Successfully created class", body = ClassDto),
        (status = 400, description = "Invalid class data", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_class(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ClassRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let class = FitnessClassService::new(&state.db)
        .create(ClassParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(class.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/classes/{id}",
    tag = CLASS_TAG,
    params(
        ("id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved class", body = ClassDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_get_class(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let class = FitnessClassService::new(&state.db)
        .get_by_id(id, false)
        .await?
        .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

/// Replace a class's details.
///
/// # Returns
/// - `200 OK` - Successfully updated class
/// - `400 Bad Request` - Invalid class data or unknown trainer
/// - `401 Unauthorized` - Not logged in as admin
/// - `404 Not Found` - Class not found
#[utoipa::path(
    put,
    path = "/api/admin/classes/{id}",
    tag = CLASS_TAG,
    params(
        ("id" = i32, Path, description = "Class ID")
    ),
    request_body = ClassRequestDto,
    responses(
        (status = 200, description = "Successfully updated class", body = ClassDto),
        (status = 400, description = "Invalid class data", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_class(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ClassRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let class = FitnessClassService::new(&state.db)
        .update(id, ClassParams::from_dto(payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

    Ok((StatusCode::OK, Json(class.into_dto())))
}

/// Delete a class.
///
/// Existing orders keep their item name and amount snapshot.
#[utoipa::path(
    delete,
    path = "/api/admin/classes/{id}",
    tag = CLASS_TAG,
    params(
        ("id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted class"),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_class(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    if FitnessClassService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Class not found".to_string()))
    }
}

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_classes))
        .routes(routes!(get_class))
        .routes(routes!(admin_get_classes, create_class))
        .routes(routes!(admin_get_class, update_class, delete_class))
}
