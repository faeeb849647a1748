use super::*;

/// Tests listing the active rooms of one category.
///
/// Rooms of other categories and rooms under maintenance must not
/// appear; the result is ordered by room number ascending.
///
/// Expected: Ok with only the category's active rooms, in number order
#[tokio::test]
async fn lists_only_active_rooms_of_category_in_number_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::room_category::create_category(db).await?;
    let other_category = factory::room_category::create_category(db).await?;

    let second = factory::room::RoomFactory::new(db, category.id)
        .number("202")
        .build()
        .await?;
    let first = factory::room::RoomFactory::new(db, category.id)
        .number("201")
        .build()
        .await?;
    factory::room::RoomFactory::new(db, category.id)
        .number("203")
        .state(RoomState::Maintenance)
        .build()
        .await?;
    factory::room::RoomFactory::new(db, other_category.id)
        .number("101")
        .build()
        .await?;

    let rooms = CatalogRepository::new(db)
        .list_active_rooms_of_category(category.id)
        .await?;

    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].id, first.id);
    assert_eq!(rooms[1].id, second.id);

    Ok(())
}

/// Tests listing rooms for a category with no rooms.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_for_category_without_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::room_category::create_category(db).await?;

    let rooms = CatalogRepository::new(db)
        .list_active_rooms_of_category(category.id)
        .await?;

    assert!(rooms.is_empty());

    Ok(())
}
