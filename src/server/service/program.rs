use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::CatalogStatus,
    server::{
        data::{program::ProgramRepository, trainer::TrainerRepository},
        error::AppError,
        model::program::{PaginatedPrograms, Program, ProgramParams},
        util::parse::{page_size, total_pages},
    },
};

pub struct ProgramService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgramService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ProgramParams) -> Result<Program, AppError> {
        params.validate()?;
        self.check_trainer(params.trainer_id).await?;

        let repo = ProgramRepository::new(self.db);
        let program = repo.create(params).await?;

        let (program, trainer) = repo
            .get_by_id(program.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Program not found after creation".to_string()))?;

        Program::from_entity(program, trainer)
    }

    /// Replaces a program's fields. Returns None if the program doesn't exist.
    pub async fn update(&self, id: i32, params: ProgramParams) -> Result<Option<Program>, AppError> {
        params.validate()?;
        self.check_trainer(params.trainer_id).await?;

        let repo = ProgramRepository::new(self.db);
        if repo.update(id, params).await?.is_none() {
            return Ok(None);
        }

        repo.get_by_id(id)
            .await?
            .map(|(program, trainer)| Program::from_entity(program, trainer))
            .transpose()
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ProgramRepository::new(self.db).delete(id).await?)
    }

    pub async fn get_by_id(&self, id: i32, active_only: bool) -> Result<Option<Program>, AppError> {
        let Some((program, trainer)) = ProgramRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let program = Program::from_entity(program, trainer)?;
        if active_only && program.status != CatalogStatus::Active {
            return Ok(None);
        }

        Ok(Some(program))
    }

    pub async fn get_paginated(
        &self,
        active_only: bool,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedPrograms, AppError> {
        let per_page = page_size(entries);
        let status = active_only.then_some(CatalogStatus::Active);

        let (programs, total) = ProgramRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        let programs: Result<Vec<_>, _> = programs
            .into_iter()
            .map(|(program, trainer)| Program::from_entity(program, trainer))
            .collect();

        Ok(PaginatedPrograms {
            programs: programs?,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    async fn check_trainer(&self, trainer_id: Option<i32>) -> Result<(), AppError> {
        match trainer_id {
            Some(id) if !TrainerRepository::new(self.db).exists(id).await? => Err(
                AppError::BadRequest(format!("Trainer {} does not exist", id)),
            ),
            _ => Ok(()),
        }
    }
}
