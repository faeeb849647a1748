use super::*;

/// Tests inserting a new booking.
///
/// Expected: Ok with a Confirmed booking carrying the given fields
#[tokio::test]
async fn creates_confirmed_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _category, room) = factory::helpers::create_booking_dependencies(db).await?;

    let booking = BookingRepository::new(db)
        .create(NewBookingParams {
            customer_dni: customer.dni,
            room_id: room.id,
            check_in: date(2024, 4, 1),
            check_out: date(2024, 4, 4),
            occupancy: 2,
            total_cost: 27000,
        })
        .await?;

    assert_eq!(booking.customer_dni, customer.dni);
    assert_eq!(booking.room_id, room.id);
    assert_eq!(booking.check_in, date(2024, 4, 1));
    assert_eq!(booking.check_out, date(2024, 4, 4));
    assert_eq!(booking.occupancy, 2);
    assert_eq!(booking.total_cost, 27000);
    assert_eq!(booking.status, BookingStatus::Confirmed);

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}
