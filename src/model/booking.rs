use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use entity::booking::BookingStatus;

use crate::model::customer::CustomerDto;

#[derive(Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub category_id: i32,
    /// Check-in date, `YYYY-MM-DD`.
    pub check_in: NaiveDate,
    /// Check-out date, `YYYY-MM-DD`, exclusive.
    pub check_out: NaiveDate,
    pub occupancy: i32,
}

#[derive(Deserialize, ToSchema)]
pub struct ModifyBookingDto {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub occupancy: i32,
}

/// Booking lifecycle state as it appears on the wire.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
pub enum BookingStatusDto {
    Confirmed,
    Cancelled,
}

impl BookingStatusDto {
    pub fn from_status(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Confirmed => Self::Confirmed,
            BookingStatus::Cancelled => Self::Cancelled,
        }
    }
}

/// Room summary nested in booking responses.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct RoomSummaryDto {
    pub number: String,
}

/// Category summary nested in booking responses.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct CategorySummaryDto {
    pub name: String,
    pub max_occupancy: i32,
    pub nightly_rate: i64,
}

/// A customer's view of one booking, with the assigned room and its
/// category nested for display.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub occupancy: i32,
    pub total_cost: i64,
    pub status: BookingStatusDto,
    pub created_at: DateTime<Utc>,
    pub room: RoomSummaryDto,
    pub category: CategorySummaryDto,
}

impl BookingDto {
    pub fn from_parts(
        booking: entity::booking::Model,
        room: entity::room::Model,
        category: entity::room_category::Model,
    ) -> Self {
        Self {
            id: booking.id,
            check_in: booking.check_in,
            check_out: booking.check_out,
            occupancy: booking.occupancy,
            total_cost: booking.total_cost,
            status: BookingStatusDto::from_status(booking.status),
            created_at: booking.created_at,
            room: RoomSummaryDto {
                number: room.number,
            },
            category: CategorySummaryDto {
                name: category.name,
                max_occupancy: category.max_occupancy,
                nightly_rate: category.nightly_rate,
            },
        }
    }
}

/// Admin view of one booking: the customer's public profile nested in
/// addition to room and category.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct AdminBookingDto {
    #[serde(flatten)]
    pub booking: BookingDto,
    pub customer: CustomerDto,
}

impl AdminBookingDto {
    pub fn from_parts(
        booking: entity::booking::Model,
        customer: entity::customer::Model,
        room: entity::room::Model,
        category: entity::room_category::Model,
    ) -> Self {
        Self {
            booking: BookingDto::from_parts(booking, room, category),
            customer: CustomerDto::from_model(customer),
        }
    }
}

/// Query parameters for the admin date-range search.
#[derive(Deserialize, ToSchema)]
pub struct DateRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
