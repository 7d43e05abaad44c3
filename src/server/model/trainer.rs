//! Trainer domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        catalog::CatalogStatus,
        trainer::{PaginatedTrainersDto, TrainerDto, TrainerRequestDto},
    },
    server::{error::AppError, model::catalog::require_name, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Trainer {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: String,
    pub bio: Option<String>,
    pub status: CatalogStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trainer {
    /// # Returns
    /// - `Err(AppError::InternalErr(ParseStoredValue))` - Unknown stored status
    pub fn from_entity(entity: entity::trainer::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            specialization: entity.specialization,
            bio: entity.bio,
            status: parse_stored("trainer.status", &entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> TrainerDto {
        TrainerDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            specialization: self.specialization,
            bio: self.bio,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Full set of editable trainer fields, used for both create and update.
#[derive(Debug, Clone)]
pub struct TrainerParams {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: String,
    pub bio: Option<String>,
    pub status: CatalogStatus,
}

impl TrainerParams {
    pub fn from_dto(dto: TrainerRequestDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.map(|email| email.trim().to_lowercase()),
            phone: dto.phone,
            specialization: dto.specialization.trim().to_string(),
            bio: dto.bio,
            status: dto.status,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        require_name(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedTrainers {
    pub trainers: Vec<Trainer>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedTrainers {
    pub fn into_dto(self) -> PaginatedTrainersDto {
        PaginatedTrainersDto {
            trainers: self.trainers.into_iter().map(Trainer::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
