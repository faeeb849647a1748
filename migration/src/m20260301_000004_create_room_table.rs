use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_room_category_table::RoomCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(string_len_uniq(Room::Number, 10))
                    .col(integer(Room::CategoryId))
                    .col(string_len(Room::State, 20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_category_id")
                            .from(Room::Table, Room::CategoryId)
                            .to(RoomCategory::Table, RoomCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    Number,
    CategoryId,
    State,
}
