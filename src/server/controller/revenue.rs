use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Utc};
use tower_sessions::Session;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        revenue::{MonthlyRevenueDto, MonthlyRevenueQuery, RevenueRangeQuery, RevenueSummaryDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::revenue::RevenueService,
        state::AppState,
    },
};

/// Tag for grouping revenue endpoints in OpenAPI documentation
pub static REVENUE_TAG: &str = "revenue";

/// Get revenue totals over confirmed orders.
///
/// Totals are broken down by item kind. Both bounds are optional; without them
/// every confirmed order is counted.
///
/// # Access Control
/// - `Admin` - Only admins can view revenue
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Admin's session for authentication
/// - `query` - Optional `[from, to)` range over confirmation time
///
/// # Returns
/// - `200 OK` - Revenue summary
/// - `400 Bad Request` - `from` is not before `to`
/// - `401 Unauthorized` - Not logged in as admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/revenue",
    tag = REVENUE_TAG,
    params(RevenueRangeQuery),
    responses(
        (status = 200, description = "Revenue summary", body = RevenueSummaryDto),
        (status = 400, description = "Invalid range", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_revenue(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RevenueRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let summary = RevenueService::new(&state.db)
        .summary(query.from, query.to)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Get twelve monthly revenue buckets for a year.
///
/// Defaults to the current UTC year.
///
/// # Access Control
/// - `Admin` - Only admins can view revenue
#[utoipa::path(
    get,
    path = "/api/admin/revenue/monthly",
    tag = REVENUE_TAG,
    params(MonthlyRevenueQuery),
    responses(
        (status = 200, description = "Monthly revenue", body = MonthlyRevenueDto),
        (status = 400, description = "Invalid year", body = ErrorDto),
        (status = 401, description = "Not logged in as admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monthly_revenue(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MonthlyRevenueQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let year = query.year.unwrap_or_else(|| Utc::now().year());

    let monthly = RevenueService::new(&state.db).monthly(year).await?;

    Ok((StatusCode::OK, Json(monthly.into_dto())))
}

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_revenue))
        .routes(routes!(get_monthly_revenue))
}
