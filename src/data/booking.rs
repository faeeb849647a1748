use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use entity::booking::BookingStatus;

/// Fields of a new Confirmed booking.
///
/// Assembled by the lifecycle manager after validation and room
/// allocation; the repository persists it verbatim.
pub struct NewBookingParams {
    pub customer_dni: i64,
    pub room_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub occupancy: i32,
    pub total_cost: i64,
}

/// Repository over persisted booking records.
///
/// Bookings are never physically deleted; cancellation is a status
/// transition performed by `set_cancelled`.
pub struct BookingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new Confirmed booking.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created booking
    /// - `Err(DbErr)`: Database error, e.g. FK violation
    pub async fn create(&self, params: NewBookingParams) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            customer_dni: ActiveValue::Set(params.customer_dni),
            room_id: ActiveValue::Set(params.room_id),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            occupancy: ActiveValue::Set(params.occupancy),
            total_cost: ActiveValue::Set(params.total_cost),
            status: ActiveValue::Set(BookingStatus::Confirmed),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Finds a booking by id that belongs to the given customer.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The booking
    /// - `Ok(None)`: No such booking, or it belongs to someone else;
    ///   the two cases are indistinguishable by design
    /// - `Err(DbErr)`: Database error
    pub async fn find_owned(
        &self,
        booking_id: i32,
        customer_dni: i64,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(booking_id)
            .filter(entity::booking::Column::CustomerDni.eq(customer_dni))
            .one(self.db)
            .await
    }

    /// Finds a Confirmed booking by id that belongs to the given
    /// customer. Used by Modify, which must not touch cancelled
    /// bookings.
    pub async fn find_owned_confirmed(
        &self,
        booking_id: i32,
        customer_dni: i64,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(booking_id)
            .filter(entity::booking::Column::CustomerDni.eq(customer_dni))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed))
            .one(self.db)
            .await
    }

    /// Rewrites a booking's stay in place: dates, occupancy, and the
    /// recomputed cost. The booking stays Confirmed on the same room.
    pub async fn update_stay(
        &self,
        booking: entity::booking::Model,
        check_in: NaiveDate,
        check_out: NaiveDate,
        occupancy: i32,
        total_cost: i64,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.check_in = ActiveValue::Set(check_in);
        active_model.check_out = ActiveValue::Set(check_out);
        active_model.occupancy = ActiveValue::Set(occupancy);
        active_model.total_cost = ActiveValue::Set(total_cost);

        active_model.update(self.db).await
    }

    /// Transitions a booking to Cancelled. Terminal; the interval is
    /// permanently freed for the room.
    pub async fn set_cancelled(
        &self,
        booking: entity::booking::Model,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.status = ActiveValue::Set(BookingStatus::Cancelled);

        active_model.update(self.db).await
    }

    /// Lists all of a customer's bookings, cancelled included, newest
    /// stay first (check-in descending).
    pub async fn list_for_customer(
        &self,
        customer_dni: i64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CustomerDni.eq(customer_dni))
            .order_by_desc(entity::booking::Column::CheckIn)
            .all(self.db)
            .await
    }

    /// Admin search: all non-cancelled bookings of one customer,
    /// check-in descending.
    pub async fn search_by_customer(
        &self,
        customer_dni: i64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CustomerDni.eq(customer_dni))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled))
            .order_by_desc(entity::booking::Column::CheckIn)
            .all(self.db)
            .await
    }

    /// Admin search: all non-cancelled bookings whose interval
    /// overlaps `[start, end)`, check-in ascending.
    pub async fn search_by_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CheckIn.lt(end))
            .filter(entity::booking::Column::CheckOut.gt(start))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled))
            .order_by_asc(entity::booking::Column::CheckIn)
            .all(self.db)
            .await
    }
}
