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
/// use entity::prelude::{User, Profile};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Profile)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new builder with no tables.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Tables should be
    /// added in dependency order (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for authentication and profiles.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Session
    /// - Profile
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
            .with_table(Session)
            .with_table(Profile)
    }

    /// Adds the user tables plus everything a group needs.
    ///
    /// Adds `with_user_tables()` followed by Group, GroupCaptain and GroupMember.
    pub fn with_group_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Group)
            .with_table(GroupCaptain)
            .with_table(GroupMember)
    }

    /// Adds the user tables plus everything an event needs.
    ///
    /// Adds `with_user_tables()` followed by Event, EventHost, EventGroup and EventAttendee.
    pub fn with_event_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Event)
            .with_table(EventHost)
            .with_table(EventGroup)
            .with_table(EventAttendee)
    }

    /// Adds every table in the schema.
    ///
    /// Use this for tests that drive the full HTTP router.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_all_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_group_tables()
            .with_table(Event)
            .with_table(EventHost)
            .with_table(EventGroup)
            .with_table(EventAttendee)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
