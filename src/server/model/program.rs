//! Training program domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        catalog::{CatalogStatus, ItemKind},
        program::{PaginatedProgramsDto, ProgramDto, ProgramRequestDto},
    },
    server::{
        error::AppError,
        model::catalog::{require_name, require_positive, require_price, OrderableItem},
        util::parse::parse_stored,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub trainer_id: Option<i32>,
    pub trainer_name: Option<String>,
    pub duration_weeks: i32,
    pub price: i64,
    pub status: CatalogStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Program {
    pub fn from_entity(
        entity: entity::program::Model,
        trainer: Option<entity::trainer::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            trainer_id: entity.trainer_id,
            trainer_name: trainer.map(|trainer| trainer.name),
            duration_weeks: entity.duration_weeks,
            price: entity.price,
            status: parse_stored("program.status", &entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ProgramDto {
        ProgramDto {
            id: self.id,
            name: self.name,
            description: self.description,
            trainer_id: self.trainer_id,
            trainer_name: self.trainer_name,
            duration_weeks: self.duration_weeks,
            price: self.price,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_orderable(self) -> OrderableItem {
        OrderableItem {
            kind: ItemKind::Program,
            id: self.id,
            name: self.name,
            price: self.price,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProgramParams {
    pub name: String,
    pub description: String,
    pub trainer_id: Option<i32>,
    pub duration_weeks: i32,
    pub price: i64,
    pub status: CatalogStatus,
}

impl ProgramParams {
    pub fn from_dto(dto: ProgramRequestDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            trainer_id: dto.trainer_id,
            duration_weeks: dto.duration_weeks,
            price: dto.price,
            status: dto.status,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        require_name(&self.name)?;
        require_positive("Duration", self.duration_weeks)?;
        require_price(self.price)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPrograms {
    pub programs: Vec<Program>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPrograms {
    pub fn into_dto(self) -> PaginatedProgramsDto {
        PaginatedProgramsDto {
            programs: self.programs.into_iter().map(Program::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
