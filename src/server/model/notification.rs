//! Notification domain models.
//!
//! A notification belongs to exactly one user or one admin. The table stores
//! that as two nullable columns; `Recipient` is the only way the rest of the
//! server sees it, so the "exactly one" rule is checked once, here.

use chrono::{DateTime, Utc};

use crate::{
    model::notification::{
        NotificationDto, PaginatedNotificationsDto, RecipientKind, SendNotificationDto,
    },
    server::error::{internal::InternalError, AppError},
};

pub const DEFAULT_NOTIFICATION_TYPE: &str = "neutral";
pub const DEFAULT_NOTIFICATION_ICON: &str = "bell";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    User(i32),
    Admin(i32),
}

impl Recipient {
    pub fn kind(&self) -> RecipientKind {
        match self {
            Self::User(_) => RecipientKind::User,
            Self::Admin(_) => RecipientKind::Admin,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Self::User(id) | Self::Admin(id) => *id,
        }
    }

    /// Live room name: `user_<id>` or `admin_<id>`.
    pub fn room(&self) -> String {
        match self {
            Self::User(id) => format!("user_{}", id),
            Self::Admin(id) => format!("admin_{}", id),
        }
    }

    /// Splits into the `(user_id, admin_id)` column pair.
    pub fn columns(&self) -> (Option<i32>, Option<i32>) {
        match self {
            Self::User(id) => (Some(*id), None),
            Self::Admin(id) => (None, Some(*id)),
        }
    }

    /// Rebuilds a recipient from the column pair of notification `id`.
    pub fn from_columns(
        id: i32,
        user_id: Option<i32>,
        admin_id: Option<i32>,
    ) -> Result<Self, InternalError> {
        match (user_id, admin_id) {
            (Some(user_id), None) => Ok(Self::User(user_id)),
            (None, Some(admin_id)) => Ok(Self::Admin(admin_id)),
            _ => Err(InternalError::InvalidRecipient { id }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub recipient: Recipient,
    pub title: String,
    pub message: String,
    pub notification_type: String,
    pub icon: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    /// # Returns
    /// - `Err(AppError::InternalErr(InvalidRecipient))` - Row has both or neither
    ///   recipient column set
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, AppError> {
        Ok(Self {
            recipient: Recipient::from_columns(entity.id, entity.user_id, entity.admin_id)?,
            id: entity.id,
            title: entity.title,
            message: entity.message,
            notification_type: entity.notification_type,
            icon: entity.icon,
            is_read: entity.is_read,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            recipient_kind: self.recipient.kind(),
            recipient_id: self.recipient.id(),
            title: self.title,
            message: self.message,
            notification_type: self.notification_type,
            icon: self.icon,
            is_read: self.is_read,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Input for the notification dispatcher.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub recipient: Recipient,
    pub title: String,
    pub message: String,
    pub notification_type: Option<String>,
    pub icon: Option<String>,
}

impl CreateNotificationParams {
    pub fn new(recipient: Recipient, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            recipient,
            title: title.into(),
            message: message.into(),
            notification_type: None,
            icon: None,
        }
    }

    /// Admin-to-user message.
    pub fn from_send_dto(dto: SendNotificationDto) -> Self {
        Self {
            recipient: Recipient::User(dto.user_id),
            title: dto.title.trim().to_string(),
            message: dto.message,
            notification_type: dto.notification_type,
            icon: dto.icon,
        }
    }

    pub fn with_type(mut self, notification_type: impl Into<String>) -> Self {
        self.notification_type = Some(notification_type.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Type to store, falling back to `"neutral"` when unset or blank.
    pub fn resolved_type(&self) -> String {
        resolve(&self.notification_type, DEFAULT_NOTIFICATION_TYPE)
    }

    /// Icon to store, falling back to `"bell"` when unset or blank.
    pub fn resolved_icon(&self) -> String {
        resolve(&self.icon, DEFAULT_NOTIFICATION_ICON)
    }
}

fn resolve(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedNotifications {
    pub notifications: Vec<Notification>,
    pub unread: u64,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedNotifications {
    pub fn into_dto(self) -> PaginatedNotificationsDto {
        PaginatedNotificationsDto {
            notifications: self
                .notifications
                .into_iter()
                .map(Notification::into_dto)
                .collect(),
            unread: self.unread,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
