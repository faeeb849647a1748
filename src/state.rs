//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared state for request handlers.
///
/// Initialized once at startup and cloned per request via Axum's state
/// extraction. `DatabaseConnection` is a pool, so clones share it.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
