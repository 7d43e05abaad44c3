use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::otp::OtpService};

/// Starts the OTP cleanup scheduler
///
/// Runs every minute and deletes OTP records whose expiry has passed. Verification
/// already rejects expired codes; this only keeps the table small.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = delete_expired_otps(&db).await {
                tracing::error!("Error deleting expired OTPs: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("OTP cleanup scheduler started");

    Ok(scheduler)
}

/// Deletes expired OTP records.
///
/// # Returns
/// - `Ok(count)` - Number of records removed
pub async fn delete_expired_otps(db: &DatabaseConnection) -> Result<u64, AppError> {
    let deleted = OtpService::new(db).delete_expired(Utc::now()).await?;

    if deleted > 0 {
        tracing::debug!("Deleted {} expired OTPs", deleted);
    }

    Ok(deleted)
}
