//! Database repository layer for all domain entities.
//!
//! Repositories hold a reference to any SeaORM connection type (pool
//! or open transaction) so the same query code runs standalone and
//! inside the lifecycle manager's transactional boundary. All reads
//! and writes against the store go through this layer.

pub mod availability;
pub mod booking;
pub mod catalog;
