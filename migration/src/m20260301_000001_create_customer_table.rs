use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(big_integer(Customer::Dni).primary_key())
                    .col(string_len(Customer::FirstName, 100))
                    .col(string_len(Customer::LastName, 100))
                    .col(string_len_uniq(Customer::Email, 255))
                    .col(big_integer(Customer::Phone))
                    .col(string_len(Customer::PasswordHash, 255))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Dni,
    FirstName,
    LastName,
    Email,
    Phone,
    PasswordHash,
}
