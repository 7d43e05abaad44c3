//! Outgoing email for OTP delivery.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{
    config::SmtpConfig,
    error::{mail::MailError, AppError},
    service::otp::OTP_EXPIRY_MINUTES,
};

/// SMTP sender for one-time passwords.
///
/// Without SMTP configuration the mailer runs in development mode and writes
/// codes to the log instead of sending them.
#[derive(Clone)]
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
}

impl Mailer {
    /// Builds the SMTP transport from configuration.
    ///
    /// # Returns
    /// - `Ok(Mailer)` - Mailer, in development mode if `smtp` is `None`
    /// - `Err(AppError::MailErr(Transport))` - The relay host could not be resolved
    pub fn from_config(smtp: Option<&SmtpConfig>) -> Result<Self, AppError> {
        let Some(smtp) = smtp else {
            tracing::warn!("SMTP is not configured, OTP codes will be logged instead of emailed");
            return Ok(Self::disabled());
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)
            .map_err(MailError::from)?
            .port(smtp.port)
            .credentials(Credentials::new(
                smtp.username.clone(),
                smtp.password.clone(),
            ))
            .build();

        Ok(Self {
            transport: Some(transport),
            from: smtp.from.clone(),
        })
    }

    /// Mailer that only logs.
    pub fn disabled() -> Self {
        Self {
            transport: None,
            from: String::new(),
        }
    }

    /// Mailer whose every send fails before reaching the network.
    #[cfg(test)]
    pub fn undeliverable() -> Self {
        Self {
            transport: Some(
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous("localhost")
                    .port(1)
                    .build(),
            ),
            from: "not a mailbox".to_string(),
        }
    }

    /// Emails a verification code.
    pub async fn send_otp(&self, email: &str, code: &str) -> Result<(), AppError> {
        let Some(transport) = &self.transport else {
            tracing::info!("OTP for {}: {}", email, code);
            return Ok(());
        };

        let message = Message::builder()
            .from(self.from.parse::<Mailbox>().map_err(MailError::from)?)
            .to(email.parse::<Mailbox>().map_err(MailError::from)?)
            .subject("Your verification code")
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "Your verification code is {}.\n\nIt expires in {} minutes.",
                code, OTP_EXPIRY_MINUTES
            ))
            .map_err(MailError::from)?;

        transport.send(message).await.map_err(MailError::from)?;

        tracing::debug!("Sent OTP email to {}", email);

        Ok(())
    }
}
