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
        trainer::{PaginatedTrainersDto, TrainerDto, TrainerRequestDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::trainer::TrainerParams,
        service::trainer::TrainerService, state::AppState,
    },
};

/// Tag for grouping trainer endpoints in OpenAPI documentation
pub static TRAINER_TAG: &str = "trainer";

/// Get paginated active trainers.
///
/// Public listing for the customer website. Inactive trainers are omitted.
///
/// # Access Control
/// - Public - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of active trainers
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trainers",
    tag = TRAINER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved trainers", body = PaginatedTrainersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trainers(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let trainers = TrainerService::new(&state.db)
        .get_paginated(true, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(trainers.into_dto())))
}

/// Get an active trainer by ID.
///
/// # Access Control
/// - Public - No authentication required
///
/// # Returns
/// - `200 OK` - Trainer details
/// - `404 Not Found` - Trainer doesn't exist or is inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trainers/{id}",
    tag = TRAINER_TAG,
    params(
        ("id" = i32, Path, description = "Trainer ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved trainer", body = TrainerDto),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trainer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let trainer = TrainerService::new(&state.db)
        .get_by_id(id, true)
        .await?
        .ok_or_else(|| AppError::NotFound("Trainer not found".to_string()))?;

    Ok((StatusCode::OK, Json(trainer.into_dto())))
}

/// Get paginated trainers of every status.
///
/// # Access Control
/// - `Admin` - Only admins can see inactive trainers
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Admin's session for authentication
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of trainers
/// - `401 Unauthorized` - Not logged in as admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/trainers",
    tag = TRAINER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved trainers", body = PaginatedTrainersDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_get_trainers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let trainers = TrainerService::new(&state.db)
        .get_paginated(false, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(trainers.into_dto())))
}

/// Create a new trainer.
///
/// # Access Control
/// - `Admin` - Only admins can create trainers
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Admin's session for authentication
/// - `payload` - Trainer data (name, contact details, specialization, bio, status)
///
/// # Returns
/// - `201 Created` - Successfully created trainer
/// - `400 Bad Request` - Missing name or specialization
/// - `401 Unauthorized` - Not logged in as admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/trainers",
    tag = TRAINER_TAG,
    request_body = TrainerRequestDto,
    responses(
        (status = 201, description = "Successfully created trainer", body = TrainerDto),
        (status = 400, description = "Invalid trainer data", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_trainer(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TrainerRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let trainer = TrainerService::new(&state.db)
        .create(TrainerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(trainer.into_dto())))
}

/// Get a trainer by ID regardless of status.
///
/// # Access Control
/// - `Admin` - Only admins can see inactive trainers
///
/// # Returns
/// - `200 OK` - Trainer details
/// - `401 Unauthorized` - Not logged in as admin
/// - `404 Not Found` - Trainer not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/trainers/{id}",
    tag = TRAINER_TAG,
    params(
        ("id" = i32, Path, description = "Trainer ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved trainer", body = TrainerDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_get_trainer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let trainer = TrainerService::new(&state.db)
        .get_by_id(id, false)
        .await?
        .ok_or_else(|| AppError::NotFound("Trainer not found".to_string()))?;

    Ok((StatusCode::OK, Json(trainer.into_dto())))
}

/// Replace a trainer's details.
///
/// # Access Control
/// - `Admin` - Only admins can update trainers
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Admin's session for authentication
/// - `id` - Trainer ID to update
/// - `payload` - Complete trainer data
///
/// # Returns
/// - `200 OK` - Successfully updated trainer
/// - `400 Bad Request` - Invalid trainer data
/// - `401 Unauthorized` - Not logged in as admin
/// - `404 Not Found` - Trainer not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/trainers/{id}",
    tag = TRAINER_TAG,
    params(
        ("id" = i32, Path, description = "Trainer ID")
    ),
    request_body = TrainerRequestDto,
    responses(
        (status = 200, description = "Successfully updated trainer", body = TrainerDto),
        (status = 400, description = "Invalid trainer data", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_trainer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<TrainerRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let trainer = TrainerService::new(&state.db)
        .update(id, TrainerParams::from_dto(payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Trainer not found".to_string()))?;

    Ok((StatusCode::OK, Json(trainer.into_dto())))
}

/// Delete a trainer.
///
/// Classes and programs taught by the trainer are kept with their trainer cleared.
///
/// # Access Control
/// - `Admin` - Only admins can delete trainers
///
/// # Returns
/// - `204 No Content` - Successfully deleted trainer
/// - `401 Unauthorized` - Not logged in as admin
/// - `404 Not Found` - Trainer not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/trainers/{id}",
    tag = TRAINER_TAG,
    params(
        ("id" = i32, Path, description = "Trainer ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted trainer"),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_trainer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    if TrainerService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Trainer not found".to_string()))
    }
}

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_trainers))
        .routes(routes!(get_trainer))
        .routes(routes!(admin_get_trainers, create_trainer))
        .routes(routes!(admin_get_trainer, update_trainer, delete_trainer))
}
