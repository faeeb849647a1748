//! HTTP request handlers.
//!
//! Each handler extracts the session and application state, resolves
//! the principal through `AuthGuard` where the route requires one, and
//! delegates to the service layer. Handlers never touch repositories
//! directly.

pub mod admin;
pub mod booking;
pub mod catalog;
pub mod customer;
