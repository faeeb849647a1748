use super::*;

/// Tests listing all categories.
///
/// Expected: Ok with every category, ordered by id ascending
#[tokio::test]
async fn lists_all_categories_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::room_category::create_category(db).await?;
    let second = factory::room_category::create_category(db).await?;
    let third = factory::room_category::create_category(db).await?;

    let categories = CatalogRepository::new(db).list_categories().await?;

    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0].id, first.id);
    assert_eq!(categories[1].id, second.id);
    assert_eq!(categories[2].id, third.id);

    Ok(())
}

/// Tests listing categories on an empty catalog.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_without_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let categories = CatalogRepository::new(db).list_categories().await?;

    assert!(categories.is_empty());

    Ok(())
}
