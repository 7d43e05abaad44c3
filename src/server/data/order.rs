//! Order data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::order::OrderStatus, server::model::order::CreateOrderParams};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending order.
    pub async fn create(&self, params: CreateOrderParams) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();

        entity::order::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            item_kind: ActiveValue::Set(params.item_kind.as_str().to_string()),
            item_id: ActiveValue::Set(params.item_id),
            item_name: ActiveValue::Set(params.item_name),
            amount: ActiveValue::Set(params.amount),
            status: ActiveValue::Set(OrderStatus::Pending.as_str().to_string()),
            confirmed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.db).await
    }

    /// Gets a page of one user's orders, newest first.
    pub async fn get_paginated_by_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::order::Model>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((orders, total))
    }

    /// Gets a page of all orders, newest first, optionally filtered by status.
    pub async fn get_paginated(
        &self,
        status: Option<OrderStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::order::Model>, u64), DbErr> {
        let mut query = entity::prelude::Order::find();
        if let Some(status) = status {
            query = query.filter(entity::order::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((orders, total))
    }

    /// Moves a pending order to confirmed.
    ///
    /// The status check is part of the UPDATE, so of two concurrent verifications
    /// only one confirms the order.
    ///
    /// # Returns
    /// - `Ok(true)` - Order was pending and is now confirmed
    /// - `Ok(false)` - Order missing or not pending
    pub async fn confirm_pending(&self, id: i32, confirmed_at: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(
                entity::order::Column::Status,
                Expr::value(OrderStatus::Confirmed.as_str()),
            )
            .col_expr(entity::order::Column::ConfirmedAt, Expr::value(confirmed_at))
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(confirmed_at))
            .filter(entity::order::Column::Id.eq(id))
            .filter(entity::order::Column::Status.eq(OrderStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets an order's status, replacing `confirmed_at`.
    ///
    /// Returns `None` if the order doesn't exist.
    pub async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
        confirmed_at: Option<DateTime<Utc>>,
    ) -> Result<Option<entity::order::Model>, DbErr> {
        let Some(existing) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut order: entity::order::ActiveModel = existing.into();
        order.status = ActiveValue::Set(status.as_str().to_string());
        order.confirmed_at = ActiveValue::Set(confirmed_at);
        order.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(order.update(self.db).await?))
    }

    /// Confirmed orders with `confirmed_at` in `[from, to)`; open bounds are unbounded.
    pub async fn get_confirmed_between(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        let mut query = entity::prelude::Order::find()
            .filter(entity::order::Column::Status.eq(OrderStatus::Confirmed.as_str()))
            .filter(entity::order::Column::ConfirmedAt.is_not_null());

        if let Some(from) = from {
            query = query.filter(entity::order::Column::ConfirmedAt.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(entity::order::Column::ConfirmedAt.lt(to));
        }

        query
            .order_by_asc(entity::order::Column::ConfirmedAt)
            .all(self.db)
            .await
    }
}
