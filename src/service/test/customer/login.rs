use super::*;

/// Tests logging in with the right password.
///
/// Expected: Ok; the session carries the customer's DNI afterwards
#[tokio::test]
async fn logs_in_and_establishes_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let service = CustomerService::new(db);
    let registered = service
        .register(register_dto(55_555_555, "login@example.com"))
        .await?;

    let profile = service
        .login(
            session,
            LoginDto {
                email: "login@example.com".to_string(),
                password: "s3cret".to_string(),
            },
        )
        .await?;

    assert_eq!(profile.dni, registered.dni);

    let stored_dni = crate::middleware::session::CustomerSession::new(session)
        .get_dni()
        .await?;
    assert_eq!(stored_dni, Some(registered.dni));

    Ok(())
}

/// Tests logging in with the wrong password.
///
/// Expected: Err(InvalidCredentials); the session stays empty
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let service = CustomerService::new(db);
    service
        .register(register_dto(66_666_666, "wrongpw@example.com"))
        .await?;

    let result = service
        .login(
            session,
            LoginDto {
                email: "wrongpw@example.com".to_string(),
                password: "not-it".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let stored_dni = crate::middleware::session::CustomerSession::new(session)
        .get_dni()
        .await?;
    assert!(stored_dni.is_none());

    Ok(())
}

/// Tests logging in with an email no account uses. The error is the
/// same as for a wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = CustomerService::new(db)
        .login(
            session,
            LoginDto {
                email: "nobody@example.com".to_string(),
                password: "s3cret".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
