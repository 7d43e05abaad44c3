use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::CatalogStatus,
    server::{
        data::{fitness_class::FitnessClassRepository, trainer::TrainerRepository},
        error::AppError,
        model::fitness_class::{ClassParams, FitnessClass, PaginatedClasses},
        util::parse::{page_size, total_pages},
    },
};

pub struct FitnessClassService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FitnessClassService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a class.
    ///
    /// # Returns
    /// - `Ok(FitnessClass)` - Created class with its trainer name resolved
    /// - `Err(AppError::BadRequest)` - Invalid fields or unknown trainer
    pub async fn create(&self, params: ClassParams) -> Result<FitnessClass, AppError> {
        params.validate()?;
        self.check_trainer(params.trainer_id).await?;

        let repo = FitnessClassRepository::new(self.db);
        let class = repo.create(params).await?;

        let (class, trainer) = repo
            .get_by_id(class.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Class not found after creation".to_string()))?;

        FitnessClass::from_entity(class, trainer)
    }

    /// Replaces a class's fields. Returns None if the class doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        params: ClassParams,
    ) -> Result<Option<FitnessClass>, AppError> {
        params.validate()?;
        self.check_trainer(params.trainer_id).await?;

        let repo = FitnessClassRepository::new(self.db);
        if repo.update(id, params).await?.is_none() {
            return Ok(None);
        }

        repo.get_by_id(id)
            .await?
            .map(|(class, trainer)| FitnessClass::from_entity(class, trainer))
            .transpose()
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(FitnessClassRepository::new(self.db).delete(id).await?)
    }

    /// Gets a class by ID; with `active_only` an inactive class counts as missing.
    pub async fn get_by_id(
        &self,
        id: i32,
        active_only: bool,
    ) -> Result<Option<FitnessClass>, AppError> {
        let Some((class, trainer)) = FitnessClassRepository::new(self.db).get_by_id(id).await?
        else {
            return Ok(None);
        };

        let class = FitnessClass::from_entity(class, trainer)?;
        if active_only && class.status != CatalogStatus::Active {
            return Ok(None);
        }

        Ok(Some(class))
    }

    pub async fn get_paginated(
        &self,
        active_only: bool,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedClasses, AppError> {
        let per_page = page_size(entries);
        let status = active_only.then_some(CatalogStatus::Active);

        let (classes, total) = FitnessClassRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        let classes: Result<Vec<_>, _> = classes
            .into_iter()
            .map(|(class, trainer)| FitnessClass::from_entity(class, trainer))
            .collect();

        Ok(PaginatedClasses {
            classes: classes?,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    async fn check_trainer(&self, trainer_id: Option<i32>) -> Result<(), AppError> {
        let Some(trainer_id) = trainer_id else {
            return Ok(());
        };

        if !TrainerRepository::new(self.db).exists(trainer_id).await? {
            return Err(AppError::BadRequest(format!(
                "Trainer {} does not exist",
                trainer_id
            )));
        }

        Ok(())
    }
}
