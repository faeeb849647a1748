//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Monotonically increasing across all factories, so generated DNIs,
/// emails, and room numbers never collide within one test binary.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a customer, a room category, and one active room of that
/// category, everything a booking needs.
///
/// # Returns
/// - `Ok((customer, category, room))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::customer::Model,
        entity::room_category::Model,
        entity::room::Model,
    ),
    DbErr,
> {
    let customer = crate::factory::customer::create_customer(db).await?;
    let category = crate::factory::room_category::create_category(db).await?;
    let room = crate::factory::room::create_room(db, category.id).await?;

    Ok((customer, category, room))
}

/// Creates a confirmed booking together with its customer, category,
/// and room dependencies.
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::customer::Model,
        entity::room_category::Model,
        entity::room::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (customer, category, room) = create_booking_dependencies(db).await?;
    let booking = crate::factory::booking::create_booking(db, customer.dni, room.id).await?;

    Ok((customer, category, room, booking))
}
