//! Customer factory for creating test customer entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
///
/// Defaults produce a unique DNI and email per call.
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    dni: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: i64,
    password_hash: String,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - dni: `10_000_000 + n` where n is auto-incremented
    /// - email: `"customer{n}@example.com"`
    /// - password_hash: a placeholder string (not a valid argon2 hash)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            dni: 10_000_000 + id as i64,
            first_name: "Test".to_string(),
            last_name: format!("Customer {}", id),
            email: format!("customer{}@example.com", id),
            phone: 600_000_000 + id as i64,
            password_hash: "not-a-real-hash".to_string(),
        }
    }

    pub fn dni(mut self, dni: i64) -> Self {
        self.dni = dni;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Builds and inserts the customer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::customer::Model)` - Created customer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            dni: ActiveValue::Set(self.dni),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            password_hash: ActiveValue::Set(self.password_hash),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}
