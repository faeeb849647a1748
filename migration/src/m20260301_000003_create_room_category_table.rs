use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomCategory::Id))
                    .col(string_len_uniq(RoomCategory::Name, 50))
                    .col(text_null(RoomCategory::Description))
                    .col(integer(RoomCategory::MaxOccupancy))
                    .col(big_integer(RoomCategory::NightlyRate))
                    .col(integer(RoomCategory::TotalRooms))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomCategory {
    Table,
    Id,
    Name,
    Description,
    MaxOccupancy,
    NightlyRate,
    TotalRooms,
}
