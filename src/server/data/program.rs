//! Training program data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::catalog::CatalogStatus, server::model::program::ProgramParams};

pub type ProgramWithTrainer = (entity::program::Model, Option<entity::trainer::Model>);

pub struct ProgramRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgramRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ProgramParams) -> Result<entity::program::Model, DbErr> {
        let now = Utc::now();

        entity::program::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            trainer_id: ActiveValue::Set(params.trainer_id),
            duration_weeks: ActiveValue::Set(params.duration_weeks),
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
        params: ProgramParams,
    ) -> Result<Option<entity::program::Model>, DbErr> {
        let Some(existing) = entity::prelude::Program::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut program: entity::program::ActiveModel = existing.into();
        program.name = ActiveValue::Set(params.name);
        program.description = ActiveValue::Set(params.description);
        program.trainer_id = ActiveValue::Set(params.trainer_id);
        program.duration_weeks = ActiveValue::Set(params.duration_weeks);
        program.price = ActiveValue::Set(params.price);
        program.status = ActiveValue::Set(params.status.as_str().to_string());
        program.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(program.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Program::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProgramWithTrainer>, DbErr> {
        entity::prelude::Program::find_by_id(id)
            .find_also_related(entity::prelude::Trainer)
            .one(self.db)
            .await
    }

    pub async fn get_paginated(
        &self,
        status: Option<CatalogStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ProgramWithTrainer>, u64), DbErr> {
        let mut query = entity::prelude::Program::find();
        if let Some(status) = status {
            query = query.filter(entity::program::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::program::Column::Name)
            .order_by_asc(entity::program::Column::Id)
            .find_also_related(entity::prelude::Trainer)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let programs = paginator.fetch_page(page).await?;

        Ok((programs, total))
    }
}
