use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{admin, booking, catalog, customer},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    customer::register,
    customer::login,
    customer::logout,
    customer::get_me,
    customer::update_me,
    catalog::get_categories,
    booking::create_booking,
    booking::get_bookings,
    booking::modify_booking,
    booking::cancel_booking,
    admin::login,
    admin::logout,
    admin::get_bookings_by_customer,
    admin::get_bookings_by_range,
    admin::set_room_state,
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/customers/register", post(customer::register))
        .route("/api/customers/login", post(customer::login))
        .route("/api/customers/logout", post(customer::logout))
        .route(
            "/api/customers/me",
            get(customer::get_me).patch(customer::update_me),
        )
        .route("/api/categories", get(catalog::get_categories))
        .route(
            "/api/bookings",
            post(booking::create_booking).get(booking::get_bookings),
        )
        .route("/api/bookings/{booking_id}", put(booking::modify_booking))
        .route(
            "/api/bookings/{booking_id}/cancel",
            post(booking::cancel_booking),
        )
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/logout", post(admin::logout))
        .route(
            "/api/admin/bookings/customer/{dni}",
            get(admin::get_bookings_by_customer),
        )
        .route(
            "/api/admin/bookings/range",
            get(admin::get_bookings_by_range),
        )
        .route(
            "/api/admin/rooms/{room_id}/state",
            put(admin::set_room_state),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
