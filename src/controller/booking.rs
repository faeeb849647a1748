use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto, ModifyBookingDto},
    },
    service::booking::BookingService,
    state::AppState,
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Create a new booking.
///
/// Allocates the first free active room of the requested category for
/// the half-open `[check_in, check_out)` interval and confirms the
/// booking. The cost is nights times the category's nightly rate.
///
/// # Access Control
/// - `Customer` - Requires a customer session
///
/// # Returns
/// - `201 Created` - The confirmed booking with room and category
/// - `400 Bad Request` - Invalid date range or occupancy above capacity
/// - `401 Unauthorized` - Not logged in as a customer
/// - `404 Not Found` - Unknown category
/// - `409 Conflict` - No room of the category is free for those dates
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Invalid date range or occupancy", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "No availability", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = AuthGuard::new(&state.db, &session).require_customer().await?;

    let booking = BookingService::new(&state.db)
        .create(customer.dni, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// List the logged-in customer's bookings.
///
/// Includes cancelled bookings, newest stay first.
///
/// # Access Control
/// - `Customer` - Requires a customer session
///
/// # Returns
/// - `200 OK` - The customer's bookings
/// - `401 Unauthorized` - Not logged in as a customer
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "The customer's bookings", body = Vec<BookingDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let customer = AuthGuard::new(&state.db, &session).require_customer().await?;

    let bookings = BookingService::new(&state.db)
        .list_for_customer(customer.dni)
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}

/// Modify a confirmed booking's stay.
///
/// Rewrites dates and occupancy in place; the booking keeps its room
/// and the cost is recomputed. Only the owning customer can modify,
/// and only while the booking is Confirmed.
///
/// # Access Control
/// - `Customer` - Requires a customer session
///
/// # Returns
/// - `200 OK` - The updated booking
/// - `400 Bad Request` - Invalid date range or occupancy above capacity
/// - `401 Unauthorized` - Not logged in as a customer
/// - `404 Not Found` - Unknown id, not owned, or already cancelled
/// - `409 Conflict` - The room is taken over the new interval
#[utoipa::path(
    put,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    request_body = ModifyBookingDto,
    responses(
        (status = 200, description = "Successfully modified booking", body = BookingDto),
        (status = 400, description = "Invalid date range or occupancy", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "No availability", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn modify_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
    Json(payload): Json<ModifyBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = AuthGuard::new(&state.db, &session).require_customer().await?;

    let booking = BookingService::new(&state.db)
        .modify(booking_id, customer.dni, payload)
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// Cancel a booking.
///
/// Idempotent: cancelling an already-cancelled booking returns its
/// current state. The record is kept; the interval stops blocking the
/// room.
///
/// # Access Control
/// - `Customer` - Requires a customer session
///
/// # Returns
/// - `200 OK` - The booking in its Cancelled state
/// - `401 Unauthorized` - Not logged in as a customer
/// - `404 Not Found` - Unknown id or not owned
#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Successfully cancelled booking", body = BookingDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let customer = AuthGuard::new(&state.db, &session).require_customer().await?;

    let booking = BookingService::new(&state.db)
        .cancel(booking_id, customer.dni)
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}
