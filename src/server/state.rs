//! Application state shared across all request handlers.
//!
//! Built once at startup and cloned into every handler through axum's `State`
//! extractor. Every field is cheap to clone: the database connection is a pool
//! handle, the hub shares its room map through an `Arc`, and the SMTP transport
//! is pooled internally.

use sea_orm::DatabaseConnection;

use crate::server::{realtime::NotificationHub, service::mail::Mailer};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Live notification rooms for connected websockets.
    pub hub: NotificationHub,

    /// OTP email sender; logs codes when SMTP is not configured.
    pub mailer: Mailer,
}

impl AppState {
    pub fn new(db: DatabaseConnection, hub: NotificationHub, mailer: Mailer) -> Self {
        Self { db, hub, mailer }
    }
}
