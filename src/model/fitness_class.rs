use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::catalog::CatalogStatus;

/// Body for creating or replacing a class.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClassRequestDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub trainer_id: Option<i32>,
    /// Free-form schedule, e.g. "Mon/Wed 18:00".
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    pub duration_minutes: i32,
    pub capacity: i32,
    /// Price in the smallest currency unit.
    pub price: i64,
    #[serde(default)]
    pub status: CatalogStatus,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClassDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub trainer_id: Option<i32>,
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

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedClassesDto {
    pub classes: Vec<ClassDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
