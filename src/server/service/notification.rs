//! Notification dispatch and recipient inbox operations.
//!
//! Dispatch persists first and pushes second. The push goes through the
//! `NotificationHub` handed to the service, when there is one; a missing hub or
//! an empty room simply means nobody is listening.

use sea_orm::DatabaseConnection;

use crate::{
    model::notification::NOTIFICATION_NEW_EVENT,
    server::{
        data::{
            admin::AdminRepository, notification::NotificationRepository, user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        model::notification::{
            CreateNotificationParams, Notification, PaginatedNotifications, Recipient,
        },
        realtime::NotificationHub,
        util::parse::{page_size, total_pages},
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    hub: Option<&'a NotificationHub>,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: Option<&'a NotificationHub>) -> Self {
        Self { db, hub }
    }

    /// Stores a notification and pushes it to the recipient's room.
    ///
    /// The push is best effort: the stored notification is returned whether or
    /// not a socket received it.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The stored notification
    /// - `Err(AppError::DbErr)` - Insert failed; nothing was pushed
    pub async fn dispatch(&self, params: CreateNotificationParams) -> Result<Notification, AppError> {
        let notification = NotificationRepository::new(self.db).create(&params).await?;
        let notification = Notification::from_entity(notification)?;

        if let Some(hub) = self.hub {
            let room = notification.recipient.room();
            let delivered = hub
                .emit(&room, NOTIFICATION_NEW_EVENT, &notification.clone().into_dto())
                .await;

            tracing::debug!(
                "Notification {} pushed to {} socket(s) in {}",
                notification.id,
                delivered,
                room
            );
        }

        Ok(notification)
    }

    /// Admin message to a user.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The user doesn't exist
    /// - `Err(AppError::BadRequest)` - Blank title
    pub async fn send_to_user(
        &self,
        params: CreateNotificationParams,
    ) -> Result<Notification, AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }

        let user_id = params.recipient.id();
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        self.dispatch(params).await
    }

    /// Dispatches one copy of a notification to every admin.
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - Notifications that were delivered
    /// - `Err(AppError::DbErr)` - The admin list could not be read
    pub async fn notify_all_admins(
        &self,
        title: &str,
        message: &str,
        notification_type: Option<&str>,
        icon: Option<&str>,
    ) -> Result<Vec<Notification>, AppError> {
        let admin_ids = AdminRepository::new(self.db).get_all_ids().await?;

        Ok(self
            .notify_admins(&admin_ids, title, message, notification_type, icon)
            .await)
    }

    /// Dispatches one copy of a notification to each listed admin.
    ///
    /// A failed dispatch is logged and skipped so the remaining admins are
    /// still notified.
    pub async fn notify_admins(
        &self,
        admin_ids: &[i32],
        title: &str,
        message: &str,
        notification_type: Option<&str>,
        icon: Option<&str>,
    ) -> Vec<Notification> {
        let mut notifications = Vec::with_capacity(admin_ids.len());
        for &admin_id in admin_ids {
            let params = CreateNotificationParams {
                recipient: Recipient::Admin(admin_id),
                title: title.to_string(),
                message: message.to_string(),
                notification_type: notification_type.map(str::to_string),
                icon: icon.map(str::to_string),
            };

            match self.dispatch(params).await {
                Ok(notification) => notifications.push(notification),
                Err(e) => tracing::error!("Failed to notify admin {}: {}", admin_id, e),
            }
        }

        notifications
    }

    /// Gets a page of the recipient's notifications, newest first, with the
    /// unread count across all pages.
    pub async fn get_paginated(
        &self,
        recipient: Recipient,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedNotifications, AppError> {
        let repo = NotificationRepository::new(self.db);
        let per_page = page_size(entries);

        let (notifications, total) = repo.get_paginated_for(recipient, page, per_page).await?;
        let unread = repo.count_unread(recipient).await?;

        let notifications: Result<Vec<_>, _> = notifications
            .into_iter()
            .map(Notification::from_entity)
            .collect();

        Ok(PaginatedNotifications {
            notifications: notifications?,
            unread,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Marks one of the recipient's notifications read.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No such notification
    /// - `Err(AppError::AuthErr(AccessDenied))` - Addressed to someone else
    pub async fn mark_read(&self, recipient: Recipient, id: i32) -> Result<Notification, AppError> {
        self.owned_by(recipient, id).await?;

        let notification = NotificationRepository::new(self.db)
            .mark_read(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))?;

        Notification::from_entity(notification)
    }

    /// Marks every unread notification of the recipient read.
    ///
    /// # Returns
    /// - Number of notifications that changed
    pub async fn mark_all_read(&self, recipient: Recipient) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(recipient)
            .await?)
    }

    /// Deletes a notification on behalf of `actor`.
    ///
    /// Users may delete their own notifications; admins may delete any.
    pub async fn delete(&self, actor: Recipient, id: i32) -> Result<(), AppError> {
        if let Recipient::User(_) = actor {
            self.owned_by(actor, id).await?;
        }

        if !NotificationRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Notification {} not found", id)));
        }

        Ok(())
    }

    async fn owned_by(&self, recipient: Recipient, id: i32) -> Result<(), AppError> {
        let Some(notification) = NotificationRepository::new(self.db).get_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Notification {} not found", id)));
        };

        let owner = Recipient::from_columns(id, notification.user_id, notification.admin_id)?;
        if owner != recipient {
            return Err(AuthError::AccessDenied(format!(
                "{:?} attempted to access notification {} owned by {:?}",
                recipient, id, owner
            ))
            .into());
        }

        Ok(())
    }
}
