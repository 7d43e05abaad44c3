use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::catalog::CatalogStatus;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MembershipRequestDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub duration_days: i32,
    pub price: i64,
    #[serde(default)]
    pub status: CatalogStatus,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MembershipDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub duration_days: i32,
    pub price: i64,
    pub status: CatalogStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedMembershipsDto {
    pub memberships: Vec<MembershipDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
