//! Revenue reporting over confirmed orders.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::ItemKind,
    server::{
        data::order::OrderRepository,
        error::AppError,
        model::revenue::{KindRevenue, MonthRevenue, MonthlyRevenue, RevenueSummary},
        util::parse::parse_stored,
    },
};

pub struct RevenueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RevenueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Totals confirmed orders in `[from, to)`, overall and per item kind.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - `from` is not before `to`
    pub async fn summary(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<RevenueSummary, AppError> {
        if let (Some(from), Some(to)) = (from, to) {
            if from >= to {
                return Err(AppError::BadRequest(
                    "Range start must be before range end".to_string(),
                ));
            }
        }

        let orders = OrderRepository::new(self.db)
            .get_confirmed_between(from, to)
            .await?;

        let mut by_kind: Vec<KindRevenue> = ItemKind::ALL
            .iter()
            .map(|&item_kind| KindRevenue {
                item_kind,
                total: 0,
                order_count: 0,
            })
            .collect();

        for order in &orders {
            let kind: ItemKind = parse_stored("order.item_kind", &order.item_kind)?;
            if let Some(bucket) = by_kind.iter_mut().find(|bucket| bucket.item_kind == kind) {
                bucket.total += order.amount;
                bucket.order_count += 1;
            }
        }

        Ok(RevenueSummary {
            from,
            to,
            total: orders.iter().map(|order| order.amount).sum(),
            order_count: orders.len() as u64,
            by_kind,
        })
    }

    /// Twelve monthly buckets for `year`, by confirmation time.
    pub async fn monthly(&self, year: i32) -> Result<MonthlyRevenue, AppError> {
        let start = Utc
            .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| AppError::BadRequest(format!("Invalid year {}", year)))?;
        let end = Utc
            .with_ymd_and_hms(year + 1, 1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| AppError::BadRequest(format!("Invalid year {}", year)))?;

        let orders = OrderRepository::new(self.db)
            .get_confirmed_between(Some(start), Some(end))
            .await?;

        let mut months: Vec<MonthRevenue> = (1..=12)
            .map(|month| MonthRevenue {
                month,
                total: 0,
                order_count: 0,
            })
            .collect();

        for order in orders {
            let Some(confirmed_at) = order.confirmed_at else {
                continue;
            };

            let bucket = &mut months[confirmed_at.month0() as usize];
            bucket.total += order.amount;
            bucket.order_count += 1;
        }

        Ok(MonthlyRevenue { year, months })
    }
}
