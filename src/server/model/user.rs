//! Customer account models.

use chrono::{DateTime, Utc};

use crate::{
    model::auth::{RegisterDto, UserDto},
    server::{error::AppError, util::parse::normalize_email},
};

/// Minimum accepted password length for users and admins.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            created_at: self.created_at,
        }
    }
}

/// Registration request after normalization, password still in clear text.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

impl RegisterUserParams {
    /// Trims the name and phone and normalizes the email.
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: normalize_email(&dto.email),
            password: dto.password,
            phone: dto
                .phone
                .map(|phone| phone.trim().to_string())
                .filter(|phone| !phone.is_empty()),
        }
    }

    /// Rejects a blank name, a malformed email or a short password.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_account(&self.name, &self.email, &self.password)
    }
}

/// Row to insert into the user table.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
}

/// Validation shared by user registration and admin creation.
pub fn validate_account(name: &str, email: &str, password: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    let valid_email = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid_email {
        return Err(AppError::BadRequest("A valid email is required".to_string()));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}
