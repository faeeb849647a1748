//! Business logic layer between controllers and repositories.
//!
//! `booking` is the lifecycle manager at the heart of the system;
//! `customer` and `admin` cover account handling for the two principal
//! types. Every state-changing booking operation runs inside a single
//! database transaction opened here.

pub mod admin;
pub mod booking;
pub mod customer;
pub mod password;

#[cfg(test)]
mod test;
