use super::*;

/// Tests registering a new user.
///
/// Expected: Ok with a normalized email and an Argon2 hash instead of the password
#[tokio::test]
async fn registers_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = AuthService::new(db)
        .register(register_params("  Jo@Example.COM ", "correct horse"))
        .await?;

    assert_eq!(user.email, "jo@example.com");
    assert_ne!(user.password_hash, "correct horse");
    assert!(user.password_hash.starts_with("$argon2id$"));

    Ok(())
}

/// Tests registering an email that already has an account.
///
/// Expected: Err(AuthErr(EmailTaken))
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("jo@example.com")
        .build()
        .await?;

    let result = AuthService::new(db)
        .register(register_params("JO@example.com", "correct horse"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmailTaken(_)))
    ));

    Ok(())
}

/// Tests the minimum password length.
///
/// Expected: Err(BadRequest) for a 7 character password
#[tokio::test]
async fn rejects_short_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .register(register_params("jo@example.com", "1234567"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
