use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};
use std::collections::HashMap;

use crate::{
    data::{
        availability::AvailabilityResolver,
        booking::{BookingRepository, NewBookingParams},
        catalog::CatalogRepository,
    },
    error::{booking::BookingError, AppError},
    model::booking::{AdminBookingDto, BookingDto, CreateBookingDto, ModifyBookingDto},
};

/// The booking lifecycle manager.
///
/// Orchestrates create, modify, and cancel against the catalog, the
/// availability resolver, and the booking store. Each state-changing
/// operation runs inside one database transaction so the overlap check
/// and the subsequent write are isolated as a unit: on SQLite every
/// transaction is serializable, which closes the check-then-act race
/// between two concurrent requests for the same room and dates.
/// Returning an error before commit rolls the transaction back, so no
/// partial booking is ever visible.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new Confirmed booking for the customer.
    ///
    /// Validates the date range and occupancy, allocates the first
    /// free active room of the category, computes the cost as
    /// nights times nightly rate, and persists, all in one
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(BookingDto)`: The created booking with room and category
    /// - `Err(AppError::BookingErr(_))`: A domain failure (invalid
    ///   dates, unknown category, occupancy, no availability)
    /// - `Err(AppError::DbErr(_))`: Storage failure; rolled back
    pub async fn create(
        &self,
        customer_dni: i64,
        dto: CreateBookingDto,
    ) -> Result<BookingDto, AppError> {
        if dto.check_out <= dto.check_in {
            return Err(BookingError::InvalidDateRange.into());
        }

        let txn = self.db.begin().await?;

        let category = CatalogRepository::new(&txn)
            .get_category(dto.category_id)
            .await?
            .ok_or(BookingError::CategoryNotFound(dto.category_id))?;

        if dto.occupancy > category.max_occupancy {
            return Err(BookingError::OccupancyExceeded {
                requested: dto.occupancy,
                max: category.max_occupancy,
            }
            .into());
        }

        let room = AvailabilityResolver::new(&txn)
            .find_free_room(dto.category_id, dto.check_in, dto.check_out)
            .await?
            .ok_or(BookingError::NoAvailability)?;

        let total_cost = nights(dto.check_in, dto.check_out) * category.nightly_rate;

        let booking = BookingRepository::new(&txn)
            .create(NewBookingParams {
                customer_dni,
                room_id: room.id,
                check_in: dto.check_in,
                check_out: dto.check_out,
                occupancy: dto.occupancy,
                total_cost,
            })
            .await?;

        txn.commit().await?;

        Ok(BookingDto::from_parts(booking, room, category))
    }

    /// Rewrites a Confirmed booking's stay in place.
    ///
    /// The booking keeps its room; the new interval is re-checked
    /// against that room only, excluding the booking's own id, and
    /// the cost is recomputed. One transaction end to end.
    ///
    /// # Returns
    /// - `Ok(BookingDto)`: The updated booking
    /// - `Err(AppError::BookingErr(NotFoundOrNotOwned))`: Unknown id,
    ///   someone else's booking, or a cancelled one
    /// - `Err(AppError::BookingErr(_))`: Other domain failures
    pub async fn modify(
        &self,
        booking_id: i32,
        customer_dni: i64,
        dto: ModifyBookingDto,
    ) -> Result<BookingDto, AppError> {
        if dto.check_out <= dto.check_in {
            return Err(BookingError::InvalidDateRange.into());
        }

        let txn = self.db.begin().await?;

        let booking = BookingRepository::new(&txn)
            .find_owned_confirmed(booking_id, customer_dni)
            .await?
            .ok_or(BookingError::NotFoundOrNotOwned(booking_id))?;

        let (room, category) = CatalogRepository::new(&txn)
            .get_room_with_category(booking.room_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "booking {} references missing room {}",
                    booking.id, booking.room_id
                ))
            })?;

        if dto.occupancy > category.max_occupancy {
            return Err(BookingError::OccupancyExceeded {
                requested: dto.occupancy,
                max: category.max_occupancy,
            }
            .into());
        }

        let taken = AvailabilityResolver::new(&txn)
            .room_is_taken(room.id, dto.check_in, dto.check_out, Some(booking.id))
            .await?;

        if taken {
            return Err(BookingError::NoAvailability.into());
        }

        let total_cost = nights(dto.check_in, dto.check_out) * category.nightly_rate;

        let updated = BookingRepository::new(&txn)
            .update_stay(booking, dto.check_in, dto.check_out, dto.occupancy, total_cost)
            .await?;

        txn.commit().await?;

        Ok(BookingDto::from_parts(updated, room, category))
    }

    /// Cancels a booking. Idempotent: cancelling an already-cancelled
    /// booking returns its current state without error.
    ///
    /// # Returns
    /// - `Ok(BookingDto)`: The booking in its Cancelled state
    /// - `Err(AppError::BookingErr(NotFoundOrNotOwned))`: Unknown id
    ///   or someone else's booking
    pub async fn cancel(&self, booking_id: i32, customer_dni: i64) -> Result<BookingDto, AppError> {
        let txn = self.db.begin().await?;

        let booking = BookingRepository::new(&txn)
            .find_owned(booking_id, customer_dni)
            .await?
            .ok_or(BookingError::NotFoundOrNotOwned(booking_id))?;

        let (room, category) = CatalogRepository::new(&txn)
            .get_room_with_category(booking.room_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "booking {} references missing room {}",
                    booking.id, booking.room_id
                ))
            })?;

        let cancelled = match booking.status {
            entity::booking::BookingStatus::Cancelled => booking,
            entity::booking::BookingStatus::Confirmed => {
                BookingRepository::new(&txn).set_cancelled(booking).await?
            }
        };

        txn.commit().await?;

        Ok(BookingDto::from_parts(cancelled, room, category))
    }

    /// Lists the customer's own bookings, cancelled included, newest
    /// stay first.
    pub async fn list_for_customer(&self, customer_dni: i64) -> Result<Vec<BookingDto>, AppError> {
        let bookings = BookingRepository::new(self.db)
            .list_for_customer(customer_dni)
            .await?;

        self.project_bookings(bookings).await
    }

    /// Admin search by customer DNI. Excludes cancelled bookings,
    /// check-in descending.
    pub async fn admin_search_by_customer(
        &self,
        customer_dni: i64,
    ) -> Result<Vec<AdminBookingDto>, AppError> {
        let bookings = BookingRepository::new(self.db)
            .search_by_customer(customer_dni)
            .await?;

        self.project_admin_bookings(bookings).await
    }

    /// Admin search by date-range overlap. Excludes cancelled
    /// bookings, check-in ascending.
    pub async fn admin_search_by_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AdminBookingDto>, AppError> {
        let bookings = BookingRepository::new(self.db)
            .search_by_dates(start, end)
            .await?;

        self.project_admin_bookings(bookings).await
    }

    /// Resolves the rooms and categories referenced by a batch of
    /// bookings, preserving order.
    async fn project_bookings(
        &self,
        bookings: Vec<entity::booking::Model>,
    ) -> Result<Vec<BookingDto>, AppError> {
        let (rooms, categories) = self.load_room_maps(&bookings).await?;

        bookings
            .into_iter()
            .map(|booking| {
                let room = rooms
                    .get(&booking.room_id)
                    .ok_or_else(|| missing_room(&booking))?;
                let category = categories
                    .get(&room.category_id)
                    .ok_or_else(|| missing_category(room))?;

                Ok(BookingDto::from_parts(
                    booking,
                    room.clone(),
                    category.clone(),
                ))
            })
            .collect()
    }

    /// Like `project_bookings`, additionally resolving the owning
    /// customers for the admin projection.
    async fn project_admin_bookings(
        &self,
        bookings: Vec<entity::booking::Model>,
    ) -> Result<Vec<AdminBookingDto>, AppError> {
        let (rooms, categories) = self.load_room_maps(&bookings).await?;

        let customer_dnis: Vec<i64> = bookings.iter().map(|b| b.customer_dni).collect();
        let customers: HashMap<i64, entity::customer::Model> = entity::prelude::Customer::find()
            .filter(entity::customer::Column::Dni.is_in(customer_dnis))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.dni, c))
            .collect();

        bookings
            .into_iter()
            .map(|booking| {
                let room = rooms
                    .get(&booking.room_id)
                    .ok_or_else(|| missing_room(&booking))?;
                let category = categories
                    .get(&room.category_id)
                    .ok_or_else(|| missing_category(room))?;
                let customer = customers.get(&booking.customer_dni).ok_or_else(|| {
                    AppError::InternalError(format!(
                        "booking {} references missing customer {}",
                        booking.id, booking.customer_dni
                    ))
                })?;

                Ok(AdminBookingDto::from_parts(
                    booking,
                    customer.clone(),
                    room.clone(),
                    category.clone(),
                ))
            })
            .collect()
    }

    async fn load_room_maps(
        &self,
        bookings: &[entity::booking::Model],
    ) -> Result<
        (
            HashMap<i32, entity::room::Model>,
            HashMap<i32, entity::room_category::Model>,
        ),
        AppError,
    > {
        if bookings.is_empty() {
            return Ok((HashMap::new(), HashMap::new()));
        }

        let room_ids: Vec<i32> = bookings.iter().map(|b| b.room_id).collect();
        let rooms: HashMap<i32, entity::room::Model> = entity::prelude::Room::find()
            .filter(entity::room::Column::Id.is_in(room_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let category_ids: Vec<i32> = rooms.values().map(|r| r.category_id).collect();
        let categories: HashMap<i32, entity::room_category::Model> =
            entity::prelude::RoomCategory::find()
                .filter(entity::room_category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect();

        Ok((rooms, categories))
    }
}

/// Number of nights in a half-open `[check_in, check_out)` stay.
fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

fn missing_room(booking: &entity::booking::Model) -> AppError {
    AppError::InternalError(format!(
        "booking {} references missing room {}",
        booking.id, booking.room_id
    ))
}

fn missing_category(room: &entity::room::Model) -> AppError {
    AppError::InternalError(format!(
        "room {} references missing category {}",
        room.id, room.category_id
    ))
}
