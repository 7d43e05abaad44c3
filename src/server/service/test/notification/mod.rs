use crate::{
    model::notification::{NotificationEventDto, NOTIFICATION_NEW_EVENT},
    server::{
        error::{auth::AuthError, AppError},
        model::notification::{CreateNotificationParams, Recipient},
        realtime::NotificationHub,
        service::notification::NotificationService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod dispatch;
mod mark_read;
