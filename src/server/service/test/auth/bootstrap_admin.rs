use super::*;

fn bootstrap() -> AdminBootstrap {
    AdminBootstrap {
        name: "Owner".to_string(),
        email: "Owner@Studio.test".to_string(),
        password: "owner password".to_string(),
    }
}

/// Tests creating the first admin from configuration.
///
/// Expected: Ok(Some) with the configured, normalized email
#[tokio::test]
async fn creates_first_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = AuthService::new(db)
        .bootstrap_admin(Some(&bootstrap()))
        .await?
        .unwrap();

    assert_eq!(admin.email, "owner@studio.test");
    assert_eq!(admin.name, "Owner");

    Ok(())
}

/// Tests that bootstrap is skipped once an admin exists.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin::create_admin(db).await?;

    let result = AuthService::new(db)
        .bootstrap_admin(Some(&bootstrap()))
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests bootstrap without configured credentials.
///
/// Expected: Ok(None), nothing created
#[tokio::test]
async fn skips_without_configuration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);

    assert!(service.bootstrap_admin(None).await?.is_none());
    assert!(service.login_admin("owner@studio.test", "owner password").await.is_err());

    Ok(())
}
