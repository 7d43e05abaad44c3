//! Notification factory.
//!
//! Inserts notification rows directly, bypassing the dispatch service, so tests of
//! listing and read-state operations can set up data without a hub.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    admin_id: Option<i32>,
    title: String,
    is_read: bool,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a factory for a notification addressed to a user.
    pub fn for_user(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id: Some(user_id),
            admin_id: None,
            title: format!("Notification {}", next_id()),
            is_read: false,
        }
    }

    /// Creates a factory for a notification addressed to an admin.
    pub fn for_admin(db: &'a DatabaseConnection, admin_id: i32) -> Self {
        Self {
            db,
            user_id: None,
            admin_id: Some(admin_id),
            title: format!("Notification {}", next_id()),
            is_read: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        let now = Utc::now();
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            admin_id: ActiveValue::Set(self.admin_id),
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set("Test message".to_string()),
            notification_type: ActiveValue::Set("neutral".to_string()),
            icon: ActiveValue::Set("bell".to_string()),
            is_read: ActiveValue::Set(self.is_read),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
