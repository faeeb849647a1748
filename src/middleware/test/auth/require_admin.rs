use super::*;

/// Tests that a logged-in admin passes the guard.
///
/// Expected: Ok with the admin's model
#[tokio::test]
async fn grants_access_to_logged_in_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::admin::create_admin(db).await?;

    AdminSession::new(session).set_id(admin.id).await?;

    let result = AuthGuard::new(db, session).require_admin().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().username, admin.username);

    Ok(())
}

/// Tests the guard with an empty session.
///
/// Expected: Err(AuthError::AdminNotInSession)
#[tokio::test]
async fn denies_access_without_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require_admin().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminNotInSession))
    ));

    Ok(())
}

/// Tests that a customer session does not satisfy the admin guard,
/// regardless of which customer is logged in.
///
/// Expected: Err(AuthError::AdminNotInSession)
#[tokio::test]
async fn customer_session_does_not_grant_admin_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let customer = factory::customer::create_customer(db).await?;
    CustomerSession::new(session).set_dni(customer.dni).await?;

    let result = AuthGuard::new(db, session).require_admin().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminNotInSession))
    ));

    Ok(())
}

/// Tests a stale session pointing at a deleted admin account.
///
/// Expected: Err(AuthError::AdminNotInDatabase)
#[tokio::test]
async fn denies_access_for_stale_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AdminSession::new(session).set_id(7).await?;

    let result = AuthGuard::new(db, session).require_admin().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminNotInDatabase(7)))
    ));

    Ok(())
}
