use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    #[error("No user ID in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// No admin id stored in the session.
    #[error("No admin ID in session")]
    AdminNotInSession,

    /// The session refers to an admin that no longer exists.
    #[error("Admin {0} from session not found in database")]
    AdminNotInDatabase(i32),

    /// Unknown email or wrong password.
    ///
    /// Both cases share one message so login cannot be used to probe for accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration or admin creation with an email that already has an account.
    #[error("Email {0} is already registered")]
    EmailTaken(String),

    /// Authenticated, but not allowed to touch the resource.
    #[error("Access denied: {0}")]
    AccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `*NotInSession` / `*NotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `EmailTaken` → 400 Bad Request
/// - `AccessDenied` → 403 Forbidden
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Self::AdminNotInSession | Self::AdminNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Admin not authenticated")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::EmailTaken(_) => (StatusCode::BAD_REQUEST, "Email is already registered"),
            Self::AccessDenied(_) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
