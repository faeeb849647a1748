//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use entity::room::RoomState;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// Defaults to a unique room number and the `Active` state.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    number: String,
    state: RoomState,
}

impl<'a> RoomFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            category_id,
            number: format!("{:03}", 100 + id),
            state: RoomState::Active,
        }
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn state(mut self, state: RoomState) -> Self {
        self.state = state;
        self
    }

    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            number: ActiveValue::Set(self.number),
            category_id: ActiveValue::Set(self.category_id),
            state: ActiveValue::Set(self.state),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active room with default values for the given category.
pub async fn create_room(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, category_id).build().await
}
