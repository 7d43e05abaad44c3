//! Revenue aggregates over confirmed orders.

use chrono::{DateTime, Utc};

use crate::model::{
    catalog::ItemKind,
    revenue::{KindRevenueDto, MonthRevenueDto, MonthlyRevenueDto, RevenueSummaryDto},
};

#[derive(Debug, Clone, PartialEq)]
pub struct KindRevenue {
    pub item_kind: ItemKind,
    pub total: i64,
    pub order_count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub total: i64,
    pub order_count: u64,
    /// One entry per item kind, in `ItemKind::ALL` order, zeros included.
    pub by_kind: Vec<KindRevenue>,
}

impl RevenueSummary {
    pub fn into_dto(self) -> RevenueSummaryDto {
        RevenueSummaryDto {
            from: self.from,
            to: self.to,
            total: self.total,
            order_count: self.order_count,
            by_kind: self
                .by_kind
                .into_iter()
                .map(|kind| KindRevenueDto {
                    item_kind: kind.item_kind,
                    total: kind.total,
                    order_count: kind.order_count,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthRevenue {
    pub month: u32,
    pub total: i64,
    pub order_count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenue {
    pub year: i32,
    /// Always twelve entries, January first.
    pub months: Vec<MonthRevenue>,
}

impl MonthlyRevenue {
    pub fn into_dto(self) -> MonthlyRevenueDto {
        MonthlyRevenueDto {
            year: self.year,
            months: self
                .months
                .into_iter()
                .map(|month| MonthRevenueDto {
                    month: month.month,
                    total: month.total,
                    order_count: month.order_count,
                })
                .collect(),
        }
    }
}
