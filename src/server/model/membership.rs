//! Membership plan domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        catalog::{CatalogStatus, ItemKind},
        membership::{MembershipDto, MembershipRequestDto, PaginatedMembershipsDto},
    },
    server::{
        error::AppError,
        model::catalog::{require_name, require_positive, require_price, OrderableItem},
        util::parse::parse_stored,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub duration_days: i32,
    pub price: i64,
    pub status: CatalogStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Membership {
    pub fn from_entity(entity: entity::membership::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            duration_days: entity.duration_days,
            price: entity.price,
            status: parse_stored("membership.status", &entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> MembershipDto {
        MembershipDto {
            id: self.id,
            name: self.name,
            description: self.description,
            duration_days: self.duration_days,
            price: self.price,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_orderable(self) -> OrderableItem {
        OrderableItem {
            kind: ItemKind::Membership,
            id: self.id,
            name: self.name,
            price: self.price,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MembershipParams {
    pub name: String,
    pub description: String,
    pub duration_days: i32,
    pub price: i64,
    pub status: CatalogStatus,
}

impl MembershipParams {
    pub fn from_dto(dto: MembershipRequestDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            duration_days: dto.duration_days,
            price: dto.price,
            status: dto.status,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        require_name(&self.name)?;
        require_positive("Duration", self.duration_days)?;
        require_price(self.price)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMemberships {
    pub memberships: Vec<Membership>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedMemberships {
    pub fn into_dto(self) -> PaginatedMembershipsDto {
        PaginatedMembershipsDto {
            memberships: self
                .memberships
                .into_iter()
                .map(Membership::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
