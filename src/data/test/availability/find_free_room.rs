use super::*;

/// Tests allocation order with several free rooms.
///
/// Expected: Ok with the lowest-numbered active room
#[tokio::test]
async fn returns_lowest_numbered_free_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::room_category::create_category(db).await?;
    factory::room::RoomFactory::new(db, category.id)
        .number("103")
        .build()
        .await?;
    let lowest = factory::room::RoomFactory::new(db, category.id)
        .number("101")
        .build()
        .await?;
    factory::room::RoomFactory::new(db, category.id)
        .number("102")
        .build()
        .await?;

    let room = AvailabilityResolver::new(db)
        .find_free_room(category.id, date(2024, 3, 1), date(2024, 3, 5))
        .await?;

    assert_eq!(room.unwrap().id, lowest.id);

    Ok(())
}

/// Tests that a room with an overlapping confirmed booking is skipped
/// in favor of the next free room.
///
/// Expected: Ok with the next room in number order
#[tokio::test]
async fn skips_room_with_overlapping_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let category = factory::room_category::create_category(db).await?;
    let first = factory::room::RoomFactory::new(db, category.id)
        .number("101")
        .build()
        .await?;
    let second = factory::room::RoomFactory::new(db, category.id)
        .number("102")
        .build()
        .await?;

    factory::booking::BookingFactory::new(db, customer.dni, first.id)
        .dates(date(2024, 3, 2), date(2024, 3, 6))
        .build()
        .await?;

    let room = AvailabilityResolver::new(db)
        .find_free_room(category.id, date(2024, 3, 1), date(2024, 3, 5))
        .await?;

    assert_eq!(room.unwrap().id, second.id);

    Ok(())
}

/// Tests that every room being booked over the interval yields no
/// allocation.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_all_rooms_booked() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let category = factory::room_category::create_category(db).await?;
    let room = factory::room::create_room(db, category.id).await?;

    factory::booking::BookingFactory::new(db, customer.dni, room.id)
        .dates(date(2024, 3, 1), date(2024, 3, 5))
        .build()
        .await?;

    let found = AvailabilityResolver::new(db)
        .find_free_room(category.id, date(2024, 3, 3), date(2024, 3, 7))
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests the half-open interval boundary: a stay starting exactly on
/// another stay's checkout day does not collide with it.
///
/// Expected: Ok with the same room
#[tokio::test]
async fn back_to_back_stays_share_a_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let category = factory::room_category::create_category(db).await?;
    let room = factory::room::create_room(db, category.id).await?;

    factory::booking::BookingFactory::new(db, customer.dni, room.id)
        .dates(date(2024, 3, 1), date(2024, 3, 5))
        .build()
        .await?;

    let found = AvailabilityResolver::new(db)
        .find_free_room(category.id, date(2024, 3, 5), date(2024, 3, 8))
        .await?;

    assert_eq!(found.unwrap().id, room.id);

    Ok(())
}

/// Tests that a cancelled booking does not occupy its room.
///
/// Expected: Ok with the room despite the overlapping cancelled record
#[tokio::test]
async fn cancelled_booking_does_not_block_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let category = factory::room_category::create_category(db).await?;
    let room = factory::room::create_room(db, category.id).await?;

    factory::booking::BookingFactory::new(db, customer.dni, room.id)
        .dates(date(2024, 3, 1), date(2024, 3, 5))
        .status(BookingStatus::Cancelled)
        .build()
        .await?;

    let found = AvailabilityResolver::new(db)
        .find_free_room(category.id, date(2024, 3, 2), date(2024, 3, 4))
        .await?;

    assert_eq!(found.unwrap().id, room.id);

    Ok(())
}

/// Tests that a room under maintenance is never allocated, even when
/// free.
///
/// Expected: Ok(None)
#[tokio::test]
async fn maintenance_room_is_not_allocated() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::room_category::create_category(db).await?;
    factory::room::RoomFactory::new(db, category.id)
        .state(RoomState::Maintenance)
        .build()
        .await?;

    let found = AvailabilityResolver::new(db)
        .find_free_room(category.id, date(2024, 3, 1), date(2024, 3, 5))
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a booking on a room of another category does not affect
/// allocation in this category.
///
/// Expected: Ok with this category's room
#[tokio::test]
async fn booking_in_other_category_does_not_interfere() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let category = factory::room_category::create_category(db).await?;
    let other_category = factory::room_category::create_category(db).await?;
    let room = factory::room::create_room(db, category.id).await?;
    let other_room = factory::room::create_room(db, other_category.id).await?;

    factory::booking::BookingFactory::new(db, customer.dni, other_room.id)
        .dates(date(2024, 3, 1), date(2024, 3, 5))
        .build()
        .await?;

    let found = AvailabilityResolver::new(db)
        .find_free_room(category.id, date(2024, 3, 1), date(2024, 3, 5))
        .await?;

    assert_eq!(found.unwrap().id, room.id);

    Ok(())
}
