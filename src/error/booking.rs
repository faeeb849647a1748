use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Domain failures of the booking lifecycle manager.
///
/// Every variant is an expected outcome the caller can act on, never a
/// fatal condition. The lifecycle manager returns these explicitly so
/// the HTTP boundary can map each one to a distinct response instead
/// of collapsing them into a generic error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// Check-out is not strictly after check-in.
    #[error("check-out date must be strictly after check-in date")]
    InvalidDateRange,

    /// The requested room category does not exist.
    #[error("room category {0} does not exist")]
    CategoryNotFound(i32),

    /// Requested occupancy exceeds the category's maximum.
    #[error("occupancy {requested} exceeds the category maximum of {max}")]
    OccupancyExceeded { requested: i32, max: i32 },

    /// No active room of the category is free over the requested
    /// interval. This is the "no availability" outcome, not a bug.
    #[error("no room of the requested category is available for the selected dates")]
    NoAvailability,

    /// The booking does not exist or is not owned by the requester.
    ///
    /// Deliberately a single outcome so that non-owners cannot probe
    /// for the existence of other customers' bookings.
    #[error("booking {0} was not found")]
    NotFoundOrNotOwned(i32),
}

/// Converts booking domain failures into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `InvalidDateRange`, `OccupancyExceeded`
/// - 404 Not Found - `CategoryNotFound`, `NotFoundOrNotOwned`
/// - 409 Conflict - `NoAvailability`
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidDateRange | Self::OccupancyExceeded { .. } => StatusCode::BAD_REQUEST,
            Self::CategoryNotFound(_) | Self::NotFoundOrNotOwned(_) => StatusCode::NOT_FOUND,
            Self::NoAvailability => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
