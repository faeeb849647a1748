//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion
//! logic for transforming errors into HTTP responses. The `AppError`
//! enum is the top-level error type that wraps domain-specific errors
//! and implements `IntoResponse` for automatic error handling in API
//! endpoints.

pub mod auth;
pub mod booking;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, booking::BookingError, config::ConfigError},
    model::api::ErrorDto,
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and
/// provides automatic conversion to HTTP responses. Domain-specific
/// errors (`AuthError`, `BookingError`) handle their own response
/// mapping; storage and session errors collapse to a generic 500 with
/// the detail logged server-side only.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable
    /// loading. Always a 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error. Delegates to
    /// `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Domain failure from the booking lifecycle manager. Delegates to
    /// `BookingError::into_response()`; every variant is an expected,
    /// recoverable-by-caller outcome.
    #[error(transparent)]
    BookingErr(#[from] BookingError),

    /// Database operation error from SeaORM. Results in a 500 with
    /// details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error. Results in a 500.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Resource not found. Results in a 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in a 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message. The message is
    /// logged but a generic body is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - Variable - For `AuthErr` / `BookingErr`, delegated to their own
///   `into_response()`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BookingErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging, but returns a generic
/// body to the client to avoid exposing implementation details. Used
/// as the fallback for errors without a specific HTTP mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
