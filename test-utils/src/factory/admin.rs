//! Admin factory for creating test administrator accounts.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test admins with customizable fields.
pub struct AdminFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: String,
}

impl<'a> AdminFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("admin{}", id),
            password_hash: "not-a-real-hash".to_string(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub async fn build(self) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin::Model, DbErr> {
    AdminFactory::new(db).build().await
}
