//! Order factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating orders.
///
/// Setting `confirmed_at` also switches the status to `"confirmed"`; use
/// `status()` afterwards to override it.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    item_kind: String,
    item_id: i32,
    item_name: String,
    amount: i64,
    status: String,
    confirmed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Defaults: membership item `0`, amount `5000`, status `"pending"`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            item_kind: "membership".to_string(),
            item_id: 0,
            item_name: "Test item".to_string(),
            amount: 5_000,
            status: "pending".to_string(),
            confirmed_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn item(mut self, kind: impl Into<String>, id: i32, name: impl Into<String>) -> Self {
        self.item_kind = kind.into();
        self.item_id = id;
        self.item_name = name.into();
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn confirmed_at(mut self, confirmed_at: DateTime<Utc>) -> Self {
        self.confirmed_at = Some(confirmed_at);
        self.status = "confirmed".to_string();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            item_kind: ActiveValue::Set(self.item_kind),
            item_id: ActiveValue::Set(self.item_id),
            item_name: ActiveValue::Set(self.item_name),
            amount: ActiveValue::Set(self.amount),
            status: ActiveValue::Set(self.status),
            confirmed_at: ActiveValue::Set(self.confirmed_at),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending order with default values for the given user.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}
