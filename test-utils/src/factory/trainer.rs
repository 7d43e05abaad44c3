//! Trainer factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TrainerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    specialization: String,
    status: String,
}

impl<'a> TrainerFactory<'a> {
    /// Defaults: name `"Trainer {id}"`, specialization `"Strength"`, status `"active"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Trainer {}", id),
            specialization: "Strength".to_string(),
            status: "active".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::trainer::Model, DbErr> {
        let now = Utc::now();
        entity::trainer::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            specialization: ActiveValue::Set(self.specialization),
            bio: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_trainer(db: &DatabaseConnection) -> Result<entity::trainer::Model, DbErr> {
    TrainerFactory::new(db).build().await
}
