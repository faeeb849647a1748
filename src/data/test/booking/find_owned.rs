use super::*;

/// Tests looking up a booking by id as its owner.
///
/// Expected: Ok with the booking
#[tokio::test]
async fn owner_finds_their_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _category, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let found = BookingRepository::new(db)
        .find_owned(booking.id, customer.dni)
        .await?;

    assert_eq!(found.unwrap().id, booking.id);

    Ok(())
}

/// Tests looking up someone else's booking.
///
/// Ownership failure and nonexistence are deliberately the same
/// outcome, so a caller cannot probe which booking ids exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn other_customer_cannot_see_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _category, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let other = factory::customer::create_customer(db).await?;

    let found = BookingRepository::new(db)
        .find_owned(booking.id, other.dni)
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests looking up a booking id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;

    let found = BookingRepository::new(db).find_owned(999, customer.dni).await?;

    assert!(found.is_none());

    Ok(())
}
