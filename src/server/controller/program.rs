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
        program::{PaginatedProgramsDto, ProgramDto, ProgramRequestDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::program::ProgramParams,
        service::program::ProgramService, state::AppState,
    },
};

pub static PROGRAM_TAG: &str = "program";

/// Get paginated active programs.
#[utoipa::path(
    get,
    path = "/api/programs",
    tag = PROGRAM_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved programs", body = PaginatedProgramsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_programs(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let programs = ProgramService::new(&state.db)
        .get_paginated(true, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(programs.into_dto())))
}

/// Get an active program by ID.
///
/// # Returns
/// - `200 OK` - Program details
/// - `404 Not Found` - Program doesn't exist or is inactive
#[utoipa::path(
    get,
    path = "/api/programs/{id}",
    tag = PROGRAM_TAG,
    params(
        ("id" = i32, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved program", body = ProgramDto),
        (status = 404, description = "Program not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_program(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let program = ProgramService::new(&state.db)
        .get_by_id(id, true)
        .await?
        .ok_or_else(|| AppError::NotFound("Program not found".to_string()))?;

    Ok((StatusCode::OK, Json(program.into_dto())))
}

/// Get paginated programs of every status.
///
/// # Access Control
/// - `Admin` - Only admins can see inactive programs
#[utoipa::path(
    get,
    path = "/api/admin/programs",
    tag = PROGRAM_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Successfully retrieved programs", body = PaginatedProgramsDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_get_programs(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let programs = ProgramService::new(&state.db)
        .get_paginated(false, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(programs.into_dto())))
}

/// Create a new program.
///
/// # Access Control
/// - `Admin` - Only admins can create programs
///
/// # Returns
/// - `201 Created` - Successfully created program
/// - `400 Bad Request` - Invalid program data or unknown trainer
/// - `401 Unauthorized` - Not logged in as admin
#[utoipa::path(
    post,
    path = "/api/admin/programs",
    tag = PROGRAM_TAG,
    request_body = ProgramRequestDto,
    responses(
        (status = 201, description = "Successfully created program", body = ProgramDto),
        (status = 400, description = "Invalid program data", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_program(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ProgramRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let program = ProgramService::new(&state.db)
        .create(ProgramParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(program.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/programs/{id}",
    tag = PROGRAM_TAG,
    params(
        ("id" = i32, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved program", body = ProgramDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Program not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_get_program(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let program = ProgramService::new(&state.db)
        .get_by_id(id, false)
        .await?
        .ok_or_else(|| AppError::NotFound("Program not found".to_string()))?;

    Ok((StatusCode::OK, Json(program.into_dto())))
}

/// Replace a program's details.
///
/// # Returns
/// - `200 OK` - Successfully updated program
/// - `400 Bad Request` - Invalid program data or unknown trainer
/// - `401 Unauthorized` - Not logged in as admin
/// - `404 Not Found` - Program not found
#[utoipa::path(
    put,
    path = "/api/admin/programs/{id}",
    tag = PROGRAM_TAG,
    params(
        ("id" = i32, Path, description = "Program ID")
    ),
    request_body = ProgramRequestDto,
    responses(
        (status = 200, description = "Successfully updated program", body = ProgramDto),
        (status = 400, description = "Invalid program data", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Program not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_program(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ProgramRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let program = ProgramService::new(&state.db)
        .update(id, ProgramParams::from_dto(payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Program not found".to_string()))?;

    Ok((StatusCode::OK, Json(program.into_dto())))
}

/// Delete a program.
#[utoipa::path(
    delete,
    path = "/api/admin/programs/{id}",
    tag = PROGRAM_TAG,
    params(
        ("id" = i32, Path, description = "Program ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted program"),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 404, description = "Program not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_program(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    if ProgramService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Program not found".to_string()))
    }
}

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_programs))
        .routes(routes!(get_program))
        .routes(routes!(admin_get_programs, create_program))
        .routes(routes!(admin_get_program, update_program, delete_program))
}
