//! Studio administrator models.

use chrono::{DateTime, Utc};

use crate::{
    model::auth::{AdminDto, CreateAdminDto},
    server::{error::AppError, model::user::validate_account, util::parse::normalize_email},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn from_entity(entity: entity::admin::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AdminDto {
        AdminDto {
            id: self.id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

/// New admin request, password still in clear text.
///
/// Used both by the create-admin endpoint and by the startup bootstrap.
#[derive(Debug, Clone)]
pub struct NewAdminParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewAdminParams {
    pub fn new(name: &str, email: &str, password: String) -> Self {
        Self {
            name: name.trim().to_string(),
            email: normalize_email(email),
            password,
        }
    }

    pub fn from_dto(dto: CreateAdminDto) -> Self {
        Self::new(&dto.name, &dto.email, dto.password)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_account(&self.name, &self.email, &self.password)
    }
}

/// Row to insert into the admin table.
#[derive(Debug, Clone)]
pub struct CreateAdminParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
