use super::*;

/// Tests user login with the right password.
///
/// Expected: Ok with the matching user, email matched case-insensitively
#[tokio::test]
async fn logs_in_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("jo@example.com")
        .password_hash(hash_password("correct horse")?)
        .build()
        .await?;

    let logged_in = AuthService::new(db)
        .login_user("Jo@Example.com", "correct horse")
        .await?;

    assert_eq!(logged_in.id, user.id);

    Ok(())
}

/// Tests that wrong password and unknown email fail the same way.
///
/// Expected: Err(AuthErr(InvalidCredentials)) for both
#[tokio::test]
async fn rejects_bad_credentials_generically() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("jo@example.com")
        .password_hash(hash_password("correct horse")?)
        .build()
        .await?;

    let service = AuthService::new(db);

    let wrong_password = service.login_user("jo@example.com", "battery staple").await;
    let unknown_email = service.login_user("nobody@example.com", "correct horse").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that user and admin accounts are separate.
///
/// Expected: admin login works for the admin, fails for a user's credentials
#[tokio::test]
async fn admin_login_uses_admin_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);

    let admin = service
        .create_admin(NewAdminParams::new(
            "Desk",
            "desk@studio.test",
            "front desk pass".to_string(),
        ))
        .await?;
    factory::user::UserFactory::new(db)
        .email("jo@example.com")
        .password_hash(hash_password("correct horse")?)
        .build()
        .await?;

    let logged_in = service
        .login_admin("desk@studio.test", "front desk pass")
        .await?;
    assert_eq!(logged_in.id, admin.id);

    let result = service.login_admin("jo@example.com", "correct horse").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
