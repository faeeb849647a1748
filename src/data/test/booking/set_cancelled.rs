use super::*;

/// Tests the Confirmed to Cancelled transition.
///
/// Expected: Ok with status Cancelled; all other fields untouched
#[tokio::test]
async fn transitions_to_cancelled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _category, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let original_check_in = booking.check_in;
    let original_cost = booking.total_cost;

    let cancelled = BookingRepository::new(db).set_cancelled(booking).await?;

    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert_eq!(cancelled.check_in, original_check_in);
    assert_eq!(cancelled.total_cost, original_cost);

    let stored = entity::prelude::Booking::find_by_id(cancelled.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, BookingStatus::Cancelled);

    Ok(())
}
