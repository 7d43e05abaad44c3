use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::catalog::ItemKind;

/// Optional `[from, to)` range over `confirmed_at`.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RevenueRangeQuery {
    /// Inclusive lower bound (RFC 3339)
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound (RFC 3339)
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MonthlyRevenueQuery {
    /// Calendar year (default: current year, UTC)
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct KindRevenueDto {
    pub item_kind: ItemKind,
    pub total: i64,
    pub order_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RevenueSummaryDto {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub total: i64,
    pub order_count: u64,
    pub by_kind: Vec<KindRevenueDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MonthRevenueDto {
    /// 1 through 12.
    pub month: u32,
    pub total: i64,
    pub order_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MonthlyRevenueDto {
    pub year: i32,
    pub months: Vec<MonthRevenueDto>,
}
