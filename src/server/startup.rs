use sea_orm::DatabaseConnection;
use tower_sessions::{
    cookie::SameSite, session_store::ExpiredDeletion, Expiry, SessionManagerLayer,
};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::AppError,
    realtime::NotificationHub,
    service::{auth::AuthService, mail::Mailer},
    state::AppState,
};

/// How often expired sessions are removed from the store.
const SESSION_SWEEP_INTERVAL_SECS: u64 = 60;
/// Sessions expire after this many days without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Runs the session store's own migration, then spawns a task that deletes expired
/// sessions every minute. Sessions expire after a week of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to wrap the router with
/// - `Err(AppError::DbErr)` - Session table migration failed
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let session_store = SqliteStore::new(pool);

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Migration(e.to_string()))?;

    tokio::spawn(
        session_store
            .clone()
            .continuously_delete_expired(tokio::time::Duration::from_secs(
                SESSION_SWEEP_INTERVAL_SECS,
            )),
    );

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        )));

    Ok(session)
}

/// Builds the shared application state.
///
/// # Returns
/// - `Err(AppError::MailErr)` - SMTP is configured but the transport can't be built
pub fn build_state(db: DatabaseConnection, config: &Config) -> Result<AppState, AppError> {
    let mailer = Mailer::from_config(config.smtp.as_ref())?;

    Ok(AppState::new(db, NotificationHub::new(), mailer))
}

/// Creates the first admin from `ADMIN_EMAIL`/`ADMIN_PASSWORD` when none exists.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if let Some(admin) = AuthService::new(db)
        .bootstrap_admin(config.admin.as_ref())
        .await?
    {
        tracing::info!("Bootstrapped admin account {}", admin.email);
    }

    Ok(())
}
