use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No customer principal in the session.
    #[error("no customer is logged in")]
    CustomerNotInSession,

    /// The session references a customer that no longer exists.
    #[error("customer {0} from session not found in database")]
    CustomerNotInDatabase(i64),

    /// No admin principal in the session.
    #[error("no administrator is logged in")]
    AdminNotInSession,

    /// The session references an admin that no longer exists.
    #[error("admin {0} from session not found in database")]
    AdminNotInDatabase(i32),

    /// Login failed. One variant for unknown identity and wrong
    /// password so the response does not reveal which one it was.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Session and lookup failures map to 401 Unauthorized; login failures
/// map to 401 with a deliberately vague message. Details are logged at
/// debug level server-side.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("auth failure: {}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::CustomerNotInSession | Self::CustomerNotInDatabase(_) => {
                "You must be logged in".to_string()
            }
            Self::AdminNotInSession | Self::AdminNotInDatabase(_) => {
                "Administrator access required".to_string()
            }
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorDto { error: message })).into_response()
    }
}
