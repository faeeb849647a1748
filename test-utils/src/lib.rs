//! Innkeeper Test Utils
//!
//! Shared testing utilities for the reservation backend. This crate
//! offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, plus data factories for the domain entities.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn books_a_room() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_booking_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
