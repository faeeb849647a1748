//! Room category factory for creating test reference data.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test room categories with customizable fields.
///
/// Defaults:
/// - name: `"Category {n}"` where n is auto-incremented
/// - max_occupancy: 2
/// - nightly_rate: 9000
/// - total_rooms: 1
pub struct RoomCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    max_occupancy: i32,
    nightly_rate: i64,
    total_rooms: i32,
}

impl<'a> RoomCategoryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Category {}", id),
            description: Some("Test category".to_string()),
            max_occupancy: 2,
            nightly_rate: 9000,
            total_rooms: 1,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn max_occupancy(mut self, max_occupancy: i32) -> Self {
        self.max_occupancy = max_occupancy;
        self
    }

    pub fn nightly_rate(mut self, nightly_rate: i64) -> Self {
        self.nightly_rate = nightly_rate;
        self
    }

    pub fn total_rooms(mut self, total_rooms: i32) -> Self {
        self.total_rooms = total_rooms;
        self
    }

    pub async fn build(self) -> Result<entity::room_category::Model, DbErr> {
        entity::room_category::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            max_occupancy: ActiveValue::Set(self.max_occupancy),
            nightly_rate: ActiveValue::Set(self.nightly_rate),
            total_rooms: ActiveValue::Set(self.total_rooms),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room category with default values.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::room_category::Model, DbErr> {
    RoomCategoryFactory::new(db).build().await
}
