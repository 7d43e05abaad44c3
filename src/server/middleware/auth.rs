use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{admin::AdminRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{admin::Admin, notification::Recipient, user::User},
};

/// Resolves the caller behind a session.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user in the session
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The user was deleted after logging in
    pub async fn require_user(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Requires a logged-in admin.
    pub async fn require_admin(&self) -> Result<Admin, AppError> {
        let Some(admin_id) = AuthSession::new(self.session).get_admin_id().await? else {
            return Err(AuthError::AdminNotInSession.into());
        };

        let Some(admin) = AdminRepository::new(self.db).find_by_id(admin_id).await? else {
            return Err(AuthError::AdminNotInDatabase(admin_id).into());
        };

        Ok(admin)
    }

    /// Requires either kind of account, preferring the admin when both are logged in.
    ///
    /// Used by the websocket, which serves a single room per connection.
    pub async fn require_recipient(&self) -> Result<Recipient, AppError> {
        match self.require_admin().await {
            Ok(admin) => return Ok(Recipient::Admin(admin.id)),
            Err(AppError::AuthErr(AuthError::AdminNotInSession)) => {}
            Err(e) => return Err(e),
        }

        let user = self.require_user().await?;

        Ok(Recipient::User(user.id))
    }
}
