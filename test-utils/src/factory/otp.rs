//! OTP factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for OTP records.
///
/// Useful for putting a record into states the service would only reach through
/// the passage of time (expired, past the resend cooldown).
pub struct OtpFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    code: String,
    attempts: i32,
    expires_at: DateTime<Utc>,
    last_sent_at: DateTime<Utc>,
}

impl<'a> OtpFactory<'a> {
    /// Defaults: code `"123456"`, no attempts, expires in 5 minutes, sent now.
    pub fn new(db: &'a DatabaseConnection, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            db,
            email: email.into(),
            code: "123456".to_string(),
            attempts: 0,
            expires_at: now + Duration::minutes(5),
            last_sent_at: now,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn attempts(mut self, attempts: i32) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn last_sent_at(mut self, last_sent_at: DateTime<Utc>) -> Self {
        self.last_sent_at = last_sent_at;
        self
    }

    pub async fn build(self) -> Result<entity::otp::Model, DbErr> {
        entity::otp::ActiveModel {
            email: ActiveValue::Set(self.email),
            code: ActiveValue::Set(self.code),
            attempts: ActiveValue::Set(self.attempts),
            expires_at: ActiveValue::Set(self.expires_at),
            last_sent_at: ActiveValue::Set(self.last_sent_at),
            created_at: ActiveValue::Set(self.last_sent_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
