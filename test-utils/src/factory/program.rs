//! Program factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ProgramFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    trainer_id: Option<i32>,
    price: i64,
    status: String,
}

impl<'a> ProgramFactory<'a> {
    /// Defaults: name `"Program {id}"`, no trainer, price `12000`, status `"active"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Program {}", id),
            trainer_id: None,
            price: 12_000,
            status: "active".to_string(),
        }
    }

    pub fn trainer_id(mut self, trainer_id: Option<i32>) -> Self {
        self.trainer_id = trainer_id;
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::program::Model, DbErr> {
        let now = Utc::now();
        entity::program::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("Test program".to_string()),
            trainer_id: ActiveValue::Set(self.trainer_id),
            duration_weeks: ActiveValue::Set(8),
            price: ActiveValue::Set(self.price),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_program(db: &DatabaseConnection) -> Result<entity::program::Model, DbErr> {
    ProgramFactory::new(db).build().await
}
