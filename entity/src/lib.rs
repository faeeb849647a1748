//! SeaORM entity definitions for the reservation backend.
//!
//! One module per persisted table: customers, admins, room categories,
//! physical rooms, and bookings. The `prelude` module re-exports every
//! entity under its PascalCase name for use in queries.

pub mod admin;
pub mod booking;
pub mod customer;
pub mod prelude;
pub mod room;
pub mod room_category;
