//! Booking factory for creating test booking entities.

use chrono::{NaiveDate, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Defaults:
/// - dates: 2024-01-10 to 2024-01-12 (two nights)
/// - occupancy: 1
/// - total_cost: 18000
/// - status: `Confirmed`
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    customer_dni: i64,
    room_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    occupancy: i32,
    total_cost: i64,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, customer_dni: i64, room_id: i32) -> Self {
        Self {
            db,
            customer_dni,
            room_id,
            check_in: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            occupancy: 1,
            total_cost: 18000,
            status: BookingStatus::Confirmed,
        }
    }

    /// Sets the half-open `[check_in, check_out)` interval.
    pub fn dates(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    pub fn occupancy(mut self, occupancy: i32) -> Self {
        self.occupancy = occupancy;
        self
    }

    pub fn total_cost(mut self, total_cost: i64) -> Self {
        self.total_cost = total_cost;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            customer_dni: ActiveValue::Set(self.customer_dni),
            room_id: ActiveValue::Set(self.room_id),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            occupancy: ActiveValue::Set(self.occupancy),
            total_cost: ActiveValue::Set(self.total_cost),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    customer_dni: i64,
    room_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, customer_dni, room_id).build().await
}
