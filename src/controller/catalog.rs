use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    data::catalog::CatalogRepository,
    error::AppError,
    model::{api::ErrorDto, catalog::CategoryDto},
    state::AppState,
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

/// List all room categories.
///
/// Public endpoint: customers browse categories, capacities, and
/// nightly rates before booking.
///
/// # Returns
/// - `200 OK` - All categories, ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All room categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CatalogRepository::new(&state.db).list_categories().await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(CategoryDto::from_model).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
