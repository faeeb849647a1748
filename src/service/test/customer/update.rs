use super::*;

/// Tests a partial profile update.
///
/// Expected: Ok with the new phone; email untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let original_email = customer.email.clone();

    let updated = CustomerService::new(db)
        .update(
            customer,
            UpdateCustomerDto {
                email: None,
                phone: Some(699_000_111),
                password: None,
            },
        )
        .await?;

    assert_eq!(updated.phone, 699_000_111);
    assert_eq!(updated.email, original_email);

    Ok(())
}

/// Tests changing the password.
///
/// Expected: Ok; the new password verifies and the old one no longer
/// does
#[tokio::test]
async fn rehashes_changed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CustomerService::new(db);
    service
        .register(register_dto(77_777_777, "rehash@example.com"))
        .await?;
    let customer = entity::prelude::Customer::find_by_id(77_777_777i64)
        .one(db)
        .await?
        .unwrap();

    service
        .update(
            customer,
            UpdateCustomerDto {
                email: None,
                phone: None,
                password: Some("n3w-secret".to_string()),
            },
        )
        .await?;

    let stored = entity::prelude::Customer::find_by_id(77_777_777i64)
        .one(db)
        .await?
        .unwrap();
    assert!(password::verify_password("n3w-secret", &stored.password_hash));
    assert!(!password::verify_password("s3cret", &stored.password_hash));

    Ok(())
}

/// Tests updating the email to one another account already uses.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_email_taken_by_other_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::customer::create_customer(db).await?;
    let customer = factory::customer::create_customer(db).await?;

    let result = CustomerService::new(db)
        .update(
            customer,
            UpdateCustomerDto {
                email: Some(other.email),
                phone: None,
                password: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
