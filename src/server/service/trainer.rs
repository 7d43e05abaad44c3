use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::CatalogStatus,
    server::{
        data::trainer::TrainerRepository,
        error::AppError,
        model::trainer::{PaginatedTrainers, Trainer, TrainerParams},
        util::parse::{page_size, total_pages},
    },
};

pub struct TrainerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: TrainerParams) -> Result<Trainer, AppError> {
        params.validate()?;

        let trainer = TrainerRepository::new(self.db).create(params).await?;

        Trainer::from_entity(trainer)
    }

    /// Replaces a trainer's fields. Returns None if the trainer doesn't exist.
    pub async fn update(&self, id: i32, params: TrainerParams) -> Result<Option<Trainer>, AppError> {
        params.validate()?;

        TrainerRepository::new(self.db)
            .update(id, params)
            .await?
            .map(Trainer::from_entity)
            .transpose()
    }

    /// Deletes a trainer, detaching it from its classes and programs.
    /// Returns false if the trainer doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(TrainerRepository::new(self.db).delete(id).await?)
    }

    /// Gets a trainer by ID; with `active_only` an inactive trainer counts as missing.
    pub async fn get_by_id(&self, id: i32, active_only: bool) -> Result<Option<Trainer>, AppError> {
        let Some(trainer) = TrainerRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let trainer = Trainer::from_entity(trainer)?;
        if active_only && trainer.status != CatalogStatus::Active {
            return Ok(None);
        }

        Ok(Some(trainer))
    }

    pub async fn get_paginated(
        &self,
        active_only: bool,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedTrainers, AppError> {
        let per_page = page_size(entries);
        let status = active_only.then_some(CatalogStatus::Active);

        let (trainers, total) = TrainerRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        let trainers: Result<Vec<_>, _> = trainers.into_iter().map(Trainer::from_entity).collect();

        Ok(PaginatedTrainers {
            trainers: trainers?,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
