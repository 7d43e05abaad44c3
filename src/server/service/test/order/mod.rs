use crate::{
    model::{catalog::ItemKind, order::OrderStatus},
    server::{
        data::otp::OtpRepository,
        error::{otp::OtpError, AppError},
        model::{notification::Recipient, order::PlaceOrderParams},
        realtime::NotificationHub,
        service::{mail::Mailer, notification::NotificationService, order::OrderService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update_status;
mod verify;

/// Code currently stored for `email`.
async fn stored_code(db: &sea_orm::DatabaseConnection, email: &str) -> String {
    OtpRepository::new(db)
        .find_by_email(email)
        .await
        .unwrap()
        .unwrap()
        .code
}
