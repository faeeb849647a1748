use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    data::catalog::CatalogRepository,
    error::AppError,
    middleware::{auth::AuthGuard, session::AdminSession},
    model::{
        admin::AdminLoginDto,
        api::ErrorDto,
        booking::{AdminBookingDto, DateRangeQuery},
        catalog::{RoomDto, SetRoomStateDto},
    },
    service::{admin::AdminService, booking::BookingService},
    state::AppState,
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Log in as an admin.
///
/// Verifies username and password and stores the admin identity in the
/// session cookie. An admin session grants nothing on customer routes.
///
/// # Returns
/// - `204 No Content` - Logged in
/// - `401 Unauthorized` - Unknown username or wrong password
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = ADMIN_TAG,
    request_body = AdminLoginDto,
    responses(
        (status = 204, description = "Successfully logged in"),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AdminLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminService::new(&state.db)
        .login(&session, &payload.username, &payload.password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Log out the current admin.
///
/// # Returns
/// - `204 No Content` - Session cleared
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = ADMIN_TAG,
    responses(
        (status = 204, description = "Successfully logged out"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AdminSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Search bookings by customer DNI.
///
/// Excludes cancelled bookings; newest stay first. An unknown DNI
/// yields an empty list.
///
/// # Access Control
/// - `Admin` - Requires an admin session
///
/// # Returns
/// - `200 OK` - The customer's non-cancelled bookings
/// - `401 Unauthorized` - Not logged in as an admin
#[utoipa::path(
    get,
    path = "/api/admin/bookings/customer/{dni}",
    tag = ADMIN_TAG,
    params(
        ("dni" = i64, Path, description = "Customer DNI")
    ),
    responses(
        (status = 200, description = "The customer's bookings", body = Vec<AdminBookingDto>),
        (status = 401, description = "Not logged in as an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings_by_customer(
    State(state): State<AppState>,
    session: Session,
    Path(dni): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let bookings = BookingService::new(&state.db)
        .admin_search_by_customer(dni)
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}

/// Search bookings overlapping a date range.
///
/// Returns every non-cancelled booking whose stay overlaps the
/// half-open `[start, end)` interval, check-in ascending.
///
/// # Access Control
/// - `Admin` - Requires an admin session
///
/// # Returns
/// - `200 OK` - Overlapping bookings
/// - `401 Unauthorized` - Not logged in as an admin
#[utoipa::path(
    get,
    path = "/api/admin/bookings/range",
    tag = ADMIN_TAG,
    params(
        ("start" = chrono::NaiveDate, Query, description = "Range start, YYYY-MM-DD"),
        ("end" = chrono::NaiveDate, Query, description = "Range end, YYYY-MM-DD, exclusive")
    ),
    responses(
        (status = 200, description = "Bookings overlapping the range", body = Vec<AdminBookingDto>),
        (status = 401, description = "Not logged in as an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings_by_range(
    State(state): State<AppState>,
    session: Session,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let bookings = BookingService::new(&state.db)
        .admin_search_by_dates(range.start, range.end)
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}

/// Set a room's lifecycle state.
///
/// Putting a room into `Maintenance` removes it from allocation for
/// new bookings; existing bookings on the room are untouched.
///
/// # Access Control
/// - `Admin` - Requires an admin session
///
/// # Returns
/// - `200 OK` - The updated room
/// - `400 Bad Request` - Unknown state value
/// - `401 Unauthorized` - Not logged in as an admin
/// - `404 Not Found` - Unknown room id
#[utoipa::path(
    put,
    path = "/api/admin/rooms/{room_id}/state",
    tag = ADMIN_TAG,
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    request_body = SetRoomStateDto,
    responses(
        (status = 200, description = "Successfully updated room", body = RoomDto),
        (status = 400, description = "Unknown state value", body = ErrorDto),
        (status = 401, description = "Not logged in as an admin", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_room_state(
    State(state): State<AppState>,
    session: Session,
    Path(room_id): Path<i32>,
    Json(payload): Json<SetRoomStateDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require_admin().await?;

    let room = CatalogRepository::new(&state.db)
        .set_room_state(room_id, payload.state.into_state())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Room {} not found", room_id)))?;

    Ok((StatusCode::OK, Json(RoomDto::from_model(room))))
}
