//! One-time password record.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Otp {
    pub id: i32,
    pub email: String,
    pub code: String,
    /// Failed verification attempts so far.
    pub attempts: i32,
    pub expires_at: DateTime<Utc>,
    pub last_sent_at: DateTime<Utc>,
}

impl Otp {
    pub fn from_entity(entity: entity::otp::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            code: entity.code,
            attempts: entity.attempts,
            expires_at: entity.expires_at,
            last_sent_at: entity.last_sent_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whole seconds left before another code may be sent, if any.
    pub fn cooldown_remaining(&self, now: DateTime<Utc>, cooldown: Duration) -> Option<i64> {
        let available_at = self.last_sent_at + cooldown;
        if now < available_at {
            // Round up so "wait 0 seconds" is never reported.
            let millis = (available_at - now).num_milliseconds();
            Some((millis + 999) / 1000)
        } else {
            None
        }
    }
}
