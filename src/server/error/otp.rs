use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum OtpError {
    /// A code was sent to this email less than the cooldown ago.
    #[error("Please wait {retry_after_secs} seconds before requesting a new OTP")]
    CooldownActive { retry_after_secs: i64 },

    /// No record for the email, or the record has expired.
    #[error("Invalid or expired OTP")]
    InvalidOrExpired,

    /// Code mismatch with attempts left.
    #[error("Invalid OTP, {remaining} attempts remaining")]
    InvalidCode { remaining: i32 },

    /// Code mismatch that used up the last attempt; the record is gone.
    #[error("Too many failed attempts, please request a new OTP")]
    TooManyAttempts,
}

/// `CooldownActive` → 429 Too Many Requests, everything else → 400 Bad Request.
impl IntoResponse for OtpError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::CooldownActive { .. } => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
