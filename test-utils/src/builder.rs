use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Order};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Order)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the account tables: User and Admin.
    pub fn with_account_tables(self) -> Self {
        self.with_table(User).with_table(Admin)
    }

    /// Adds the studio catalog tables.
    ///
    /// Trainer is added first since classes and programs reference it:
    /// - Trainer
    /// - FitnessClass
    /// - Program
    /// - Membership
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Trainer)
            .with_table(FitnessClass)
            .with_table(Program)
            .with_table(Membership)
    }

    /// Adds the account tables plus Notification.
    pub fn with_notification_tables(self) -> Self {
        self.with_account_tables().with_table(Notification)
    }

    /// Adds every table required by the checkout flow.
    ///
    /// Equivalent to accounts, catalog and notifications plus the Order and Otp
    /// tables. Use this when testing order placement and confirmation.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_checkout_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_checkout_tables(self) -> Self {
        self.with_notification_tables()
            .with_catalog_tables()
            .with_table(Order)
            .with_table(Otp)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
