use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use entity::room::RoomState;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub max_occupancy: i32,
    pub nightly_rate: i64,
    pub total_rooms: i32,
}

impl CategoryDto {
    pub fn from_model(model: entity::room_category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            max_occupancy: model.max_occupancy,
            nightly_rate: model.nightly_rate,
            total_rooms: model.total_rooms,
        }
    }
}

/// Room lifecycle state as it appears on the wire.
///
/// Deserialization rejects anything other than the two defined values,
/// so an invalid state never reaches the catalog.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
pub enum RoomStateDto {
    Active,
    Maintenance,
}

impl RoomStateDto {
    pub fn into_state(self) -> RoomState {
        match self {
            Self::Active => RoomState::Active,
            Self::Maintenance => RoomState::Maintenance,
        }
    }

    pub fn from_state(state: RoomState) -> Self {
        match state {
            RoomState::Active => Self::Active,
            RoomState::Maintenance => Self::Maintenance,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub number: String,
    pub category_id: i32,
    pub state: RoomStateDto,
}

impl RoomDto {
    pub fn from_model(model: entity::room::Model) -> Self {
        Self {
            id: model.id,
            number: model.number,
            category_id: model.category_id,
            state: RoomStateDto::from_state(model.state),
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct SetRoomStateDto {
    pub state: RoomStateDto,
}
