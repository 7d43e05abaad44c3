//! Account registration, login and admin bootstrap.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::AdminBootstrap,
    data::{admin::AdminRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        admin::{Admin, CreateAdminParams, NewAdminParams},
        user::{CreateUserParams, RegisterUserParams, User},
    },
    util::{
        crypto::{hash_password, verify_password},
        parse::normalize_email,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::BadRequest)` - Blank name, malformed email or short password
    /// - `Err(AppError::AuthErr(EmailTaken))` - A user with the email already exists
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        params.validate()?;

        let repo = UserRepository::new(self.db);
        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AuthError::EmailTaken(params.email).into());
        }

        let user = repo
            .create(CreateUserParams {
                password_hash: hash_password(&params.password)?,
                name: params.name,
                email: params.email,
                phone: params.phone,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Checks a user's credentials.
    ///
    /// Unknown email and wrong password both produce `InvalidCredentials`.
    pub async fn login_user(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = normalize_email(email);

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Checks an admin's credentials.
    pub async fn login_admin(&self, email: &str, password: &str) -> Result<Admin, AppError> {
        let email = normalize_email(email);

        let Some(admin) = AdminRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &admin.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(admin)
    }

    /// Creates an admin account.
    ///
    /// # Returns
    /// - `Ok(Admin)` - Created admin
    /// - `Err(AppError::BadRequest)` - Invalid name, email or password
    /// - `Err(AppError::AuthErr(EmailTaken))` - An admin with the email already exists
    pub async fn create_admin(&self, params: NewAdminParams) -> Result<Admin, AppError> {
        params.validate()?;

        let repo = AdminRepository::new(self.db);
        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AuthError::EmailTaken(params.email).into());
        }

        let admin = repo
            .create(CreateAdminParams {
                password_hash: hash_password(&params.password)?,
                name: params.name,
                email: params.email,
            })
            .await?;

        tracing::info!("Created admin {} ({})", admin.id, admin.email);

        Ok(admin)
    }

    /// Creates the first admin from configuration when the admin table is empty.
    ///
    /// # Returns
    /// - `Ok(Some(Admin))` - Admin was created
    /// - `Ok(None)` - An admin already exists, or no bootstrap credentials are configured
    pub async fn bootstrap_admin(
        &self,
        bootstrap: Option<&AdminBootstrap>,
    ) -> Result<Option<Admin>, AppError> {
        if AdminRepository::new(self.db).admin_exists().await? {
            return Ok(None);
        }

        let Some(bootstrap) = bootstrap else {
            tracing::warn!(
                "No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one on startup"
            );
            return Ok(None);
        };

        let admin = self
            .create_admin(NewAdminParams::new(
                &bootstrap.name,
                &bootstrap.email,
                bootstrap.password.clone(),
            ))
            .await?;

        Ok(Some(admin))
    }
}
