use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database
/// schemas.
///
/// Each `with_table` call derives a CREATE TABLE statement from a
/// SeaORM entity using the SQLite backend; `build()` then connects to
/// an in-memory database and executes them in order.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Customer, RoomCategory};
///
/// let test = TestBuilder::new()
///     .with_table(Customer)
///     .with_table(RoomCategory)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order: tables with foreign
    /// keys after the tables they reference.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for booking operations, in dependency
    /// order: Customer, Admin, RoomCategory, Room, Booking.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_booking_tables(self) -> Self {
        self.with_table(Customer)
            .with_table(Admin)
            .with_table(RoomCategory)
            .with_table(Room)
            .with_table(Booking)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
