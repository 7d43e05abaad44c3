//! Notification data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::{CreateNotificationParams, Recipient};

/// Matches rows addressed to `recipient`.
fn addressed_to(recipient: Recipient) -> Condition {
    match recipient {
        Recipient::User(id) => Condition::all().add(entity::notification::Column::UserId.eq(id)),
        Recipient::Admin(id) => Condition::all().add(entity::notification::Column::AdminId.eq(id)),
    }
}

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unread notification with the type and icon defaults applied.
    pub async fn create(
        &self,
        params: &CreateNotificationParams,
    ) -> Result<entity::notification::Model, DbErr> {
        let now = Utc::now();
        let (user_id, admin_id) = params.recipient.columns();

        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            admin_id: ActiveValue::Set(admin_id),
            title: ActiveValue::Set(params.title.clone()),
            message: ActiveValue::Set(params.message.clone()),
            notification_type: ActiveValue::Set(params.resolved_type()),
            icon: ActiveValue::Set(params.resolved_icon()),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets a page of a recipient's notifications, newest first.
    pub async fn get_paginated_for(
        &self,
        recipient: Recipient,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::notification::Model>, u64), DbErr> {
        let paginator = entity::prelude::Notification::find()
            .filter(addressed_to(recipient))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let notifications = paginator.fetch_page(page).await?;

        Ok((notifications, total))
    }

    pub async fn count_unread(&self, recipient: Recipient) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(addressed_to(recipient))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    /// Marks one notification read. Returns `None` if it doesn't exist.
    pub async fn mark_read(&self, id: i32) -> Result<Option<entity::notification::Model>, DbErr> {
        let Some(existing) = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if existing.is_read {
            return Ok(Some(existing));
        }

        let mut notification: entity::notification::ActiveModel = existing.into();
        notification.is_read = ActiveValue::Set(true);
        notification.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(notification.update(self.db).await?))
    }

    /// Marks every unread notification of a recipient read.
    ///
    /// # Returns
    /// - Number of notifications that changed
    pub async fn mark_all_read(&self, recipient: Recipient) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .col_expr(entity::notification::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(addressed_to(recipient))
            .filter(entity::notification::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
