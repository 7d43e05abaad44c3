//! Fitness class factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating scheduled classes.
///
/// # Example
///
/// ```rust,ignore
/// let class = FitnessClassFactory::new(&db)
///     .trainer_id(Some(trainer.id))
///     .status("inactive")
///     .build()
///     .await?;
/// ```
pub struct FitnessClassFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    trainer_id: Option<i32>,
    price: i64,
    status: String,
}

impl<'a> FitnessClassFactory<'a> {
    /// Defaults: name `"Class {id}"`, no trainer, price `1500`, status `"active"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Class {}", id),
            trainer_id: None,
            price: 1_500,
            status: "active".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
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

    pub async fn build(self) -> Result<entity::fitness_class::Model, DbErr> {
        let now = Utc::now();
        entity::fitness_class::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("Test class".to_string()),
            trainer_id: ActiveValue::Set(self.trainer_id),
            schedule: ActiveValue::Set("Mon 18:00".to_string()),
            starts_at: ActiveValue::Set(None),
            duration_minutes: ActiveValue::Set(60),
            capacity: ActiveValue::Set(20),
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

pub async fn create_class(db: &DatabaseConnection) -> Result<entity::fitness_class::Model, DbErr> {
    FitnessClassFactory::new(db).build().await
}
