//! Membership plan factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct MembershipFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: i64,
    status: String,
}

impl<'a> MembershipFactory<'a> {
    /// Defaults: name `"Membership {id}"`, price `5000`, status `"active"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Membership {}", id),
            price: 5_000,
            status: "active".to_string(),
        }
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::membership::Model, DbErr> {
        let now = Utc::now();
        entity::membership::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("Test membership".to_string()),
            duration_days: ActiveValue::Set(30),
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

pub async fn create_membership(
    db: &DatabaseConnection,
) -> Result<entity::membership::Model, DbErr> {
    MembershipFactory::new(db).build().await
}
