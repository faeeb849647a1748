use super::*;

/// Tests fetching a category by id.
///
/// Expected: Ok with the category's fields intact
#[tokio::test]
async fn returns_category_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::room_category::RoomCategoryFactory::new(db)
        .name("Individual")
        .max_occupancy(1)
        .nightly_rate(6000)
        .build()
        .await?;

    let found = CatalogRepository::new(db).get_category(category.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.name, "Individual");
    assert_eq!(found.max_occupancy, 1);
    assert_eq!(found.nightly_rate, 6000);

    Ok(())
}

/// Tests fetching a category that does not exist.
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

    let found = CatalogRepository::new(db).get_category(999).await?;

    assert!(found.is_none());

    Ok(())
}
