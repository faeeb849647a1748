use sea_orm::entity::prelude::*;

/// Lifecycle state of a physical room.
///
/// Only `Active` rooms are eligible for new bookings; `Maintenance`
/// rooms are skipped by the availability resolver but keep their
/// existing bookings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum RoomState {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Maintenance")]
    Maintenance,
}

/// A physical room with a human-readable number, unique hotel-wide.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub number: String,
    pub category_id: i32,
    pub state: RoomState,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room_category::Entity",
        from = "Column::CategoryId",
        to = "super::room_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RoomCategory,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::room_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomCategory.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
