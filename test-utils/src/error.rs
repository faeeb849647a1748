use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or execute schema
    /// statements.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to initialize the session store backing a test session.
    #[error("failed to initialize session store: {0}")]
    SessionStore(String),
}
