//! Fitness class data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::catalog::CatalogStatus, server::model::fitness_class::ClassParams};

/// A class row with its trainer, when it has one.
pub type ClassWithTrainer = (entity::fitness_class::Model, Option<entity::trainer::Model>);

pub struct FitnessClassRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FitnessClassRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ClassParams) -> Result<entity::fitness_class::Model, DbErr> {
        let now = Utc::now();

        entity::fitness_class::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            trainer_id: ActiveValue::Set(params.trainer_id),
            schedule: ActiveValue::Set(params.schedule),
            starts_at: ActiveValue::Set(params.starts_at),
            duration_minutes: ActiveValue::Set(params.duration_minutes),
            capacity: ActiveValue::Set(params.capacity),
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
        params: ClassParams,
    ) -> Result<Option<entity::fitness_class::Model>, DbErr> {
        let Some(existing) = entity::prelude::FitnessClass::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut class: entity::fitness_class::ActiveModel = existing.into();
        class.name = ActiveValue::Set(params.name);
        class.description = ActiveValue::Set(params.description);
        class.trainer_id = ActiveValue::Set(params.trainer_id);
        class.schedule = ActiveValue::Set(params.schedule);
        class.starts_at = ActiveValue::Set(params.starts_at);
        class.duration_minutes = ActiveValue::Set(params.duration_minutes);
        class.capacity = ActiveValue::Set(params.capacity);
        class.price = ActiveValue::Set(params.price);
        class.status = ActiveValue::Set(params.status.as_str().to_string());
        class.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(class.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FitnessClass::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ClassWithTrainer>, DbErr> {
        entity::prelude::FitnessClass::find_by_id(id)
            .find_also_related(entity::prelude::Trainer)
            .one(self.db)
            .await
    }

    /// Gets a page of classes ordered by name, optionally filtered by status.
    pub async fn get_paginated(
        &self,
        status: Option<CatalogStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ClassWithTrainer>, u64), DbErr> {
        let mut query = entity::prelude::FitnessClass::find();
        if let Some(status) = status {
            query = query.filter(entity::fitness_class::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::fitness_class::Column::Name)
            .order_by_asc(entity::fitness_class::Column::Id)
            .find_also_related(entity::prelude::Trainer)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let classes = paginator.fetch_page(page).await?;

        Ok((classes, total))
    }
}
