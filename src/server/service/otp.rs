//! One-time password issue and verification.
//!
//! One record per email. Sending replaces the record, so only the newest code
//! is valid; a successful verification deletes it, so each code works once.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::otp::OtpRepository,
    error::{otp::OtpError, AppError},
    service::mail::Mailer,
    util::{crypto::generate_otp_code, parse::normalize_email},
};

pub const OTP_COOLDOWN_SECONDS: i64 = 60;
pub const OTP_EXPIRY_MINUTES: i64 = 5;
pub const OTP_MAX_ATTEMPTS: i32 = 3;

pub struct OtpService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OtpService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a fresh code for `email`.
    ///
    /// # Returns
    /// - `Ok(code)` - New 6-digit code for the caller to deliver
    /// - `Err(AppError::OtpErr(CooldownActive))` - Previous code sent less than 60 seconds ago
    pub async fn send(&self, email: &str) -> Result<String, AppError> {
        let email = normalize_email(email);
        let now = Utc::now();
        let repo = OtpRepository::new(self.db);

        if let Some(existing) = repo.find_by_email(&email).await? {
            if let Some(retry_after_secs) =
                existing.cooldown_remaining(now, Duration::seconds(OTP_COOLDOWN_SECONDS))
            {
                return Err(OtpError::CooldownActive { retry_after_secs }.into());
            }
        }

        let code = generate_otp_code();
        repo.replace(
            &email,
            &code,
            now + Duration::minutes(OTP_EXPIRY_MINUTES),
            now,
        )
        .await?;

        Ok(code)
    }

    /// Issues a code and emails it.
    ///
    /// If delivery fails the new record is removed again so the cooldown does
    /// not block a retry for a code that never arrived.
    ///
    /// # Returns
    /// - `Ok(())` - Code stored and delivered
    /// - `Err(AppError::OtpErr(CooldownActive))` - Previous code sent less than 60 seconds ago
    /// - `Err(AppError::MailErr(_))` - Delivery failed; no code is stored
    pub async fn issue(&self, email: &str, mailer: &Mailer) -> Result<(), AppError> {
        let email = normalize_email(email);
        let code = self.send(&email).await?;

        if let Err(e) = mailer.send_otp(&email, &code).await {
            tracing::warn!("Failed to deliver OTP to {}, discarding code: {}", email, e);
            OtpRepository::new(self.db).delete_code(&email, &code).await?;
            return Err(e);
        }

        Ok(())
    }

    /// Checks `code` against the stored record for `email`.
    ///
    /// # Returns
    /// - `Ok(())` - Code matched; the record is consumed by exactly one caller
    /// - `Err(AppError::OtpErr(InvalidOrExpired))` - No record, or it has expired
    /// - `Err(AppError::OtpErr(InvalidCode))` - Wrong code, attempts remain
    /// - `Err(AppError::OtpErr(TooManyAttempts))` - Wrong code on the last attempt; record deleted
    pub async fn verify(&self, email: &str, code: &str) -> Result<(), AppError> {
        let email = normalize_email(email);
        let now = Utc::now();
        let repo = OtpRepository::new(self.db);

        let Some(otp) = repo.find_by_email(&email).await? else {
            return Err(OtpError::InvalidOrExpired.into());
        };

        if otp.is_expired(now) {
            repo.delete(otp.id).await?;
            return Err(OtpError::InvalidOrExpired.into());
        }

        if otp.code != code.trim() {
            if !repo.increment_attempts(otp.id, OTP_MAX_ATTEMPTS).await? {
                return Err(OtpError::TooManyAttempts.into());
            }

            let attempts = match repo.get_by_id(otp.id).await? {
                Some(current) => current.attempts,
                None => OTP_MAX_ATTEMPTS,
            };

            if attempts >= OTP_MAX_ATTEMPTS {
                repo.delete(otp.id).await?;
                tracing::debug!("OTP for {} discarded after {} failed attempts", email, attempts);
                return Err(OtpError::TooManyAttempts.into());
            }

            return Err(OtpError::InvalidCode {
                remaining: OTP_MAX_ATTEMPTS - attempts,
            }
            .into());
        }

        if !repo.consume(otp.id, &otp.code, OTP_MAX_ATTEMPTS).await? {
            return Err(OtpError::InvalidOrExpired.into());
        }

        Ok(())
    }

    /// Removes every record that expired at or before `now`.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        Ok(OtpRepository::new(self.db).delete_expired(now).await?)
    }
}
