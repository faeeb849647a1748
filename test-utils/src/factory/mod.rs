//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a builder-style
//! `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation. Factories generate unique
//! values where the schema demands uniqueness, so multiple calls in
//! one test never collide.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let customer = factory::customer::create_customer(&db).await?;
//!
//! // Create with all dependencies
//! let (customer, category, room) =
//!     factory::helpers::create_booking_dependencies(&db).await?;
//!
//! // Customize via the builder
//! let category = factory::room_category::RoomCategoryFactory::new(&db)
//!     .name("Individual")
//!     .max_occupancy(1)
//!     .nightly_rate(6000)
//!     .build()
//!     .await?;
//! ```

pub mod admin;
pub mod booking;
pub mod customer;
pub mod helpers;
pub mod room;
pub mod room_category;
