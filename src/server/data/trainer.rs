//! Trainer data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::catalog::CatalogStatus, server::model::trainer::TrainerParams};

pub struct TrainerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: TrainerParams) -> Result<entity::trainer::Model, DbErr> {
        let now = Utc::now();

        entity::trainer::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            specialization: ActiveValue::Set(params.specialization),
            bio: ActiveValue::Set(params.bio),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Replaces every editable field. Returns `None` if the trainer doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        params: TrainerParams,
    ) -> Result<Option<entity::trainer::Model>, DbErr> {
        let Some(existing) = entity::prelude::Trainer::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut trainer: entity::trainer::ActiveModel = existing.into();
        trainer.name = ActiveValue::Set(params.name);
        trainer.email = ActiveValue::Set(params.email);
        trainer.phone = ActiveValue::Set(params.phone);
        trainer.specialization = ActiveValue::Set(params.specialization);
        trainer.bio = ActiveValue::Set(params.bio);
        trainer.status = ActiveValue::Set(params.status.as_str().to_string());
        trainer.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(trainer.update(self.db).await?))
    }

    /// Deletes a trainer after detaching it from its classes and programs.
    ///
    /// # Returns
    /// - `Ok(true)` - Trainer deleted
    /// - `Ok(false)` - No trainer with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::FitnessClass::update_many()
            .col_expr(
                entity::fitness_class::Column::TrainerId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::fitness_class::Column::TrainerId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Program::update_many()
            .col_expr(
                entity::program::Column::TrainerId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::program::Column::TrainerId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Trainer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::trainer::Model>, DbErr> {
        entity::prelude::Trainer::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Trainer::find()
            .filter(entity::trainer::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of trainers ordered by name, optionally filtered by status.
    ///
    /// # Returns
    /// - `Ok((trainers, total))` - The page and the number of matching rows
    pub async fn get_paginated(
        &self,
        status: Option<CatalogStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::trainer::Model>, u64), DbErr> {
        let mut query = entity::prelude::Trainer::find();
        if let Some(status) = status {
            query = query.filter(entity::trainer::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::trainer::Column::Name)
            .order_by_asc(entity::trainer::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let trainers = paginator.fetch_page(page).await?;

        Ok((trainers, total))
    }
}
