use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{CreateNotificationParams, Recipient},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated_for;
mod mark_read;
