use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        otp::{OtpVerifiedDto, SendOtpDto, VerifyOtpDto},
    },
    server::{
        error::AppError, service::otp::OtpService, state::AppState, util::parse::normalize_email,
    },
};

/// Tag for grouping OTP endpoints in OpenAPI documentation
pub static OTP_TAG: &str = "otp";

/// Send a one-time password to an email address.
///
/// Replaces any earlier code for the address. The code expires after 5 minutes
/// and a new one can't be requested for 60 seconds.
///
/// # Access Control
/// - Public - Rate limited per client IP
///
/// # Returns
/// - `200 OK` - Code sent
/// - `400 Bad Request` - Missing email
/// - `429 Too Many Requests` - Cooldown still active, or rate limit hit
/// - `500 Internal Server Error` - Database or mail delivery error
#[utoipa::path(
    post,
    path = "/api/otp/send",
    tag = OTP_TAG,
    request_body = SendOtpDto,
    responses(
        (status = 200, description = "OTP sent", body = MessageDto),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 429, description = "Cooldown active or too many requests", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_otp(
    State(state): State<AppState>,
    Json(payload): Json<SendOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = normalize_email(&payload.email);
    if email.is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }

    OtpService::new(&state.db)
        .issue(&email, &state.mailer)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("OTP sent"))))
}

/// Verify a one-time password.
///
/// A correct code is consumed. Three wrong guesses discard the code.
///
/// # Access Control
/// - Public - Rate limited per client IP
///
/// # Returns
/// - `200 OK` - Code matched
/// - `400 Bad Request` - Invalid, expired or exhausted code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/otp/verify",
    tag = OTP_TAG,
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "OTP verified", body = OtpVerifiedDto),
        (status = 400, description = "Invalid or expired OTP", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    OtpService::new(&state.db)
        .verify(&payload.email, &payload.code)
        .await?;

    Ok((StatusCode::OK, Json(OtpVerifiedDto { verified: true })))
}

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(send_otp))
        .routes(routes!(verify_otp))
}
