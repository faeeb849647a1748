use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::booking::BookingStatus;
use entity::room::RoomState;

/// Resolves which physical rooms are free over a date interval.
///
/// All interval comparisons use half-open `[check_in, check_out)`
/// semantics: two stays overlap iff
/// `a.check_in < b.check_out AND a.check_out > b.check_in`, so the
/// checkout day itself is free for the next guest. Cancelled bookings
/// never count as occupying.
pub struct AvailabilityResolver<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityResolver<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the first free Active room of a category over the
    /// requested interval.
    ///
    /// Rooms are considered in ascending room-number order, so
    /// allocation is deterministic and reproducible: the same state
    /// and the same request always yield the same room.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: A free room
    /// - `Ok(None)`: No availability. Not an error.
    /// - `Err(DbErr)`: Database error
    pub async fn find_free_room(
        &self,
        category_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        let occupied = self.occupied_room_ids(check_in, check_out).await?;

        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::CategoryId.eq(category_id))
            .filter(entity::room::Column::State.eq(RoomState::Active));

        if !occupied.is_empty() {
            query = query.filter(entity::room::Column::Id.is_not_in(occupied));
        }

        query
            .order_by_asc(entity::room::Column::Number)
            .one(self.db)
            .await
    }

    /// Checks whether one specific room has a Confirmed booking
    /// overlapping the interval.
    ///
    /// `exclude_booking` removes one booking id from consideration;
    /// a modification must not collide with the interval it is itself
    /// vacating.
    pub async fn room_is_taken(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude_booking: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed))
            .filter(entity::booking::Column::CheckIn.lt(check_out))
            .filter(entity::booking::Column::CheckOut.gt(check_in));

        if let Some(booking_id) = exclude_booking {
            query = query.filter(entity::booking::Column::Id.ne(booking_id));
        }

        let overlapping = query.count(self.db).await?;

        Ok(overlapping > 0)
    }

    /// Collects the room ids referenced by any Confirmed booking whose
    /// interval overlaps the query interval.
    async fn occupied_room_ids(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<i32>, DbErr> {
        let overlapping = entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed))
            .filter(entity::booking::Column::CheckIn.lt(check_out))
            .filter(entity::booking::Column::CheckOut.gt(check_in))
            .all(self.db)
            .await?;

        Ok(overlapping.into_iter().map(|b| b.room_id).collect())
    }
}
