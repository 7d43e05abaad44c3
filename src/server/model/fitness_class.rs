//! Fitness class domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        catalog::{CatalogStatus, ItemKind},
        fitness_class::{ClassDto, ClassRequestDto, PaginatedClassesDto},
    },
    server::{
        error::AppError,
        model::catalog::{require_name, require_positive, require_price, OrderableItem},
        util::parse::parse_stored,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct FitnessClass {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub trainer_id: Option<i32>,
    /// Name of the referenced trainer, when it still exists.
    pub trainer_name: Option<String>,
    pub schedule: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub duration_minutes: i32,
    pub capacity: i32,
    pub price: i64,
    pub status: CatalogStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FitnessClass {
    pub fn from_entity(
        entity: entity::fitness_class::Model,
        trainer: Option<entity::trainer::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            trainer_id: entity.trainer_id,
            trainer_name: trainer.map(|trainer| trainer.name),
            schedule: entity.schedule,
            starts_at: entity.starts_at,
            duration_minutes: entity.duration_minutes,
            capacity: entity.capacity,
            price: entity.price,
            status: parse_stored("fitness_class.status", &entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ClassDto {
        ClassDto {
            id: self.id,
            name: self.name,
            description: self.description,
            trainer_id: self.trainer_id,
            trainer_name: self.trainer_name,
            schedule: self.schedule,
            starts_at: self.starts_at,
            duration_minutes: self.duration_minutes,
            capacity: self.capacity,
            price: self.price,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_orderable(self) -> OrderableItem {
        OrderableItem {
            kind: ItemKind::Class,
            id: self.id,
            name: self.name,
            price: self.price,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassParams {
    pub name: String,
    pub description: String,
    pub trainer_id: Option<i32>,
    pub schedule: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub duration_minutes: i32,
    pub capacity: i32,
    pub price: i64,
    pub status: CatalogStatus,
}

impl ClassParams {
    pub fn from_dto(dto: ClassRequestDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            trainer_id: dto.trainer_id,
            schedule: dto.schedule,
            starts_at: dto.starts_at,
            duration_minutes: dto.duration_minutes,
            capacity: dto.capacity,
            price: dto.price,
            status: dto.status,
        }
    }

    /// Checks field ranges. The trainer reference is checked by the service.
    pub fn validate(&self) -> Result<(), AppError> {
        require_name(&self.name)?;
        require_positive("Duration", self.duration_minutes)?;
        require_positive("Capacity", self.capacity)?;
        require_price(self.price)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedClasses {
    pub classes: Vec<FitnessClass>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedClasses {
    pub fn into_dto(self) -> PaginatedClassesDto {
        PaginatedClassesDto {
            classes: self.classes.into_iter().map(FitnessClass::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
