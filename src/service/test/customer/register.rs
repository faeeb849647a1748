use super::*;

/// Tests registering a new customer.
///
/// Expected: Ok with the public profile; the stored hash verifies the
/// password and is never the plaintext
#[tokio::test]
async fn registers_customer_and_hashes_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = CustomerService::new(db)
        .register(register_dto(11_111_111, "ana@example.com"))
        .await?;

    assert_eq!(profile.dni, 11_111_111);
    assert_eq!(profile.email, "ana@example.com");

    let stored = entity::prelude::Customer::find_by_id(11_111_111i64)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "s3cret");
    assert!(password::verify_password("s3cret", &stored.password_hash));

    Ok(())
}

/// Tests registering the same DNI twice.
///
/// Expected: Err(BadRequest) on the second attempt
#[tokio::test]
async fn rejects_duplicate_dni() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CustomerService::new(db);
    service
        .register(register_dto(22_222_222, "first@example.com"))
        .await?;

    let result = service
        .register(register_dto(22_222_222, "second@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests registering a second account with an already-used email.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CustomerService::new(db);
    service
        .register(register_dto(33_333_333, "shared@example.com"))
        .await?;

    let result = service
        .register(register_dto(44_444_444, "shared@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
