//! Request and response DTOs exchanged over the HTTP boundary.
//!
//! DTOs are the only shapes serialized to clients; entities never
//! cross the boundary directly. Booking responses carry a nested room
//! and category summary for display, which is projection logic only.

pub mod admin;
pub mod api;
pub mod booking;
pub mod catalog;
pub mod customer;
