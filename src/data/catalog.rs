use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::room::RoomState;

/// Repository over the room catalog: categories and physical rooms.
///
/// Categories are read-only reference data after seeding; the only
/// mutation this repository performs is the admin room state change.
pub struct CatalogRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a room category by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The category
    /// - `Ok(None)`: Category not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_category(
        &self,
        id: i32,
    ) -> Result<Option<entity::room_category::Model>, DbErr> {
        entity::prelude::RoomCategory::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists all room categories, ordered by id.
    pub async fn list_categories(&self) -> Result<Vec<entity::room_category::Model>, DbErr> {
        entity::prelude::RoomCategory::find()
            .order_by_asc(entity::room_category::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists the Active rooms of a category, ordered by room number
    /// ascending.
    pub async fn list_active_rooms_of_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::CategoryId.eq(category_id))
            .filter(entity::room::Column::State.eq(RoomState::Active))
            .order_by_asc(entity::room::Column::Number)
            .all(self.db)
            .await
    }

    /// Gets a room together with its category.
    ///
    /// # Returns
    /// - `Ok(Some((room, category)))`: Room and its category
    /// - `Ok(None)`: Room not found
    /// - `Err(DbErr)`: Database error, including a missing category
    ///   row (broken FK)
    pub async fn get_room_with_category(
        &self,
        room_id: i32,
    ) -> Result<Option<(entity::room::Model, entity::room_category::Model)>, DbErr> {
        let Some(room) = entity::prelude::Room::find_by_id(room_id).one(self.db).await? else {
            return Ok(None);
        };

        let category = entity::prelude::RoomCategory::find_by_id(room.category_id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "room {} references missing category {}",
                    room.id, room.category_id
                ))
            })?;

        Ok(Some((room, category)))
    }

    /// Sets a room's lifecycle state.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated room
    /// - `Ok(None)`: Room not found
    /// - `Err(DbErr)`: Database error
    pub async fn set_room_state(
        &self,
        room_id: i32,
        state: RoomState,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        let Some(room) = entity::prelude::Room::find_by_id(room_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::room::ActiveModel = room.into();
        active_model.state = ActiveValue::Set(state);

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Counts all rooms. Used by startup to decide whether the
    /// reference data still needs seeding.
    pub async fn count_rooms(&self) -> Result<u64, DbErr> {
        entity::prelude::Room::find().count(self.db).await
    }
}
