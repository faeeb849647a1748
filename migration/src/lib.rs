pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_customer_table;
mod m20260301_000002_create_admin_table;
mod m20260301_000003_create_room_category_table;
mod m20260301_000004_create_room_table;
mod m20260301_000005_create_booking_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_customer_table::Migration),
            Box::new(m20260301_000002_create_admin_table::Migration),
            Box::new(m20260301_000003_create_room_category_table::Migration),
            Box::new(m20260301_000004_create_room_table::Migration),
            Box::new(m20260301_000005_create_booking_table::Migration),
        ]
    }
}
