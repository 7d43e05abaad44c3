//! Membership plan data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::catalog::CatalogStatus, server::model::membership::MembershipParams};

pub struct MembershipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: MembershipParams,
    ) -> Result<entity::membership::Model, DbErr> {
        let now = Utc::now();

        entity::membership::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            duration_days: ActiveValue::Set(params.duration_days),
            price: ActiveValue::Set(params.price),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: MembershipParams,
    ) -> Result<Option<entity::membership::Model>, DbErr> {
        let Some(existing) = entity::prelude::Membership::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut membership: entity::membership::ActiveModel = existing.into();
        membership.name = ActiveValue::Set(params.name);
        membership.description = ActiveValue::Set(params.description);
        membership.duration_days = ActiveValue::Set(params.duration_days);
        membership.price = ActiveValue::Set(params.price);
        membership.status = ActiveValue::Set(params.status.as_str().to_string());
        membership.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(membership.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Membership::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::membership::Model>, DbErr> {
        entity::prelude::Membership::find_by_id(id).one(self.db).await
    }

    /// Gets a page of memberships ordered by price, optionally filtered by status.
    pub async fn get_paginated(
        &self,
        status: Option<CatalogStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::membership::Model>, u64), DbErr> {
        let mut query = entity::prelude::Membership::find();
        if let Some(status) = status {
            query = query.filter(entity::membership::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::membership::Column::Price)
            .order_by_asc(entity::membership::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let memberships = paginator.fetch_page(page).await?;

        Ok((memberships, total))
    }
}
