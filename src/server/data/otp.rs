//! OTP data repository for database operations.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::otp::Otp;

pub struct OtpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OtpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Otp>, DbErr> {
        let entity = entity::prelude::Otp::find()
            .filter(entity::otp::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Otp::from_entity))
    }

    /// Stores a fresh code for the email, replacing any previous record.
    ///
    /// Attempts are reset to zero and `last_sent_at` becomes `now`.
    pub async fn replace(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Otp, DbErr> {
        entity::prelude::Otp::insert(entity::otp::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            code: ActiveValue::Set(code.to_string()),
            attempts: ActiveValue::Set(0),
            expires_at: ActiveValue::Set(expires_at),
            last_sent_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::otp::Column::Email)
                .update_columns([
                    entity::otp::Column::Code,
                    entity::otp::Column::Attempts,
                    entity::otp::Column::ExpiresAt,
                    entity::otp::Column::LastSentAt,
                    entity::otp::Column::CreatedAt,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        self.find_by_email(email).await?.ok_or(DbErr::RecordNotFound(format!(
            "OTP for {} not found after upsert",
            email
        )))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Otp>, DbErr> {
        let entity = entity::prelude::Otp::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Otp::from_entity))
    }

    /// Counts one failed attempt, in a single statement so concurrent guesses
    /// can't overwrite each other.
    ///
    /// # Returns
    /// - `Ok(true)` - Attempt recorded
    /// - `Ok(false)` - Record gone, or it already had `max_attempts`
    pub async fn increment_attempts(&self, id: i32, max_attempts: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Otp::update_many()
            .col_expr(
                entity::otp::Column::Attempts,
                Expr::col(entity::otp::Column::Attempts).add(1),
            )
            .filter(entity::otp::Column::Id.eq(id))
            .filter(entity::otp::Column::Attempts.lt(max_attempts))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes the record if it still holds `code` with attempts left.
    ///
    /// Only one caller can consume a given record.
    ///
    /// # Returns
    /// - `Ok(true)` - This call consumed the code
    /// - `Ok(false)` - Already consumed, replaced or exhausted
    pub async fn consume(&self, id: i32, code: &str, max_attempts: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Otp::delete_many()
            .filter(entity::otp::Column::Id.eq(id))
            .filter(entity::otp::Column::Code.eq(code))
            .filter(entity::otp::Column::Attempts.lt(max_attempts))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// # Returns
    /// - Number of deleted records (0 or 1)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Otp::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes the email's record only if it still holds `code`, leaving a newer
    /// code in place.
    pub async fn delete_code(&self, email: &str, code: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Otp::delete_many()
            .filter(entity::otp::Column::Email.eq(email))
            .filter(entity::otp::Column::Code.eq(code))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every record that expired at or before `now`.
    ///
    /// # Returns
    /// - Number of deleted records
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Otp::delete_many()
            .filter(entity::otp::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
