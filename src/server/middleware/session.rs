//! Type-safe session wrappers.
//!
//! The session cookie identifies either a user or an admin, or both when one
//! browser is logged into the member site and the back office at once. Keys are
//! kept here so handlers never spell them out.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_ADMIN_ID: &str = "auth:admin";

/// Authentication state stored in the session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the logged-in user's ID.
    ///
    /// The session ID is rotated first so a pre-login cookie can't be reused.
    ///
    /// # Returns
    /// - `Ok(())` - User ID stored
    /// - `Err(AppError::SessionErr(_))` - Session store failure
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// # Returns
    /// - `Ok(Some(id))` - A user is logged in
    /// - `Ok(None)` - No user in session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Stores the logged-in admin's ID, rotating the session ID first.
    pub async fn set_admin_id(&self, admin_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_ADMIN_ID, admin_id).await?;
        Ok(())
    }

    pub async fn get_admin_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_ADMIN_ID).await?)
    }

    /// Logs the user out, leaving an admin login in the same session intact.
    pub async fn clear_user(&self) -> Result<(), AppError> {
        self.session.remove::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(())
    }

    /// Logs the admin out, leaving a user login in the same session intact.
    pub async fn clear_admin(&self) -> Result<(), AppError> {
        self.session.remove::<i32>(SESSION_AUTH_ADMIN_ID).await?;
        Ok(())
    }
}
