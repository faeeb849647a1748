use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::{auth::AuthGuard, session::CustomerSession},
    model::{
        api::ErrorDto,
        customer::{CustomerDto, LoginDto, RegisterCustomerDto, UpdateCustomerDto},
    },
    service::customer::CustomerService,
    state::AppState,
};

/// Tag for grouping customer account endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

/// Register a new customer account.
///
/// Creates a customer identified by their DNI. The password is hashed
/// before storage and never returned.
///
/// # Returns
/// - `201 Created` - The new account's public profile
/// - `400 Bad Request` - DNI or email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/customers/register",
    tag = CUSTOMER_TAG,
    request_body = RegisterCustomerDto,
    responses(
        (status = 201, description = "Successfully registered", body = CustomerDto),
        (status = 400, description = "DNI or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::new(&state.db).register(payload).await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// Log in as a customer.
///
/// Verifies email and password and stores the customer identity in the
/// session cookie.
///
/// # Returns
/// - `200 OK` - Logged in; the customer's public profile
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/customers/login",
    tag = CUSTOMER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = CustomerDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::new(&state.db)
        .login(&session, payload)
        .await?;

    Ok((StatusCode::OK, Json(customer)))
}

/// Log out the current customer.
///
/// Clears the session. Succeeds even when no one is logged in.
///
/// # Returns
/// - `204 No Content` - Session cleared
#[utoipa::path(
    post,
    path = "/api/customers/logout",
    tag = CUSTOMER_TAG,
    responses(
        (status = 204, description = "Successfully logged out"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    CustomerSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged-in customer's profile.
///
/// # Access Control
/// - `Customer` - Requires a customer session
///
/// # Returns
/// - `200 OK` - The customer's public profile
/// - `401 Unauthorized` - Not logged in as a customer
#[utoipa::path(
    get,
    path = "/api/customers/me",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "The current customer", body = CustomerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let customer = AuthGuard::new(&state.db, &session).require_customer().await?;

    Ok((StatusCode::OK, Json(CustomerDto::from_model(customer))))
}

/// Update the logged-in customer's profile.
///
/// Changes email, phone, and/or password. Omitted fields are left
/// unchanged.
///
/// # Access Control
/// - `Customer` - Requires a customer session
///
/// # Returns
/// - `200 OK` - The updated profile
/// - `400 Bad Request` - Email already registered
/// - `401 Unauthorized` - Not logged in as a customer
#[utoipa::path(
    patch,
    path = "/api/customers/me",
    tag = CUSTOMER_TAG,
    request_body = UpdateCustomerDto,
    responses(
        (status = 200, description = "Successfully updated profile", body = CustomerDto),
        (status = 400, description = "Email already registered", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = AuthGuard::new(&state.db, &session).require_customer().await?;

    let updated = CustomerService::new(&state.db)
        .update(customer, payload)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}
