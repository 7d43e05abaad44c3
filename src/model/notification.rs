use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name of the websocket event carrying a freshly created notification.
pub const NOTIFICATION_NEW_EVENT: &str = "notification:new";

/// Which side of the studio a notification is addressed to.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecipientKind {
    User,
    Admin,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub recipient_kind: RecipientKind,
    pub recipient_id: i32,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub icon: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedNotificationsDto {
    pub notifications: Vec<NotificationDto>,
    /// Unread notifications across all pages.
    pub unread: u64,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Body for an admin sending a notification to a user.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SendNotificationDto {
    pub user_id: i32,
    pub title: String,
    pub message: String,
    /// Defaults to `"neutral"`.
    #[serde(rename = "type", default)]
    pub notification_type: Option<String>,
    /// Defaults to `"bell"`.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Result of a bulk read-state update.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MarkedReadDto {
    pub updated: u64,
}

/// Frame pushed over the websocket.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NotificationEventDto {
    pub event: String,
    pub data: NotificationDto,
}
