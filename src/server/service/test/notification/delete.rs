use super::*;

/// Tests a user deleting their own and someone else's notification.
///
/// Expected: Ok for their own, Err(AccessDenied) for the other
#[tokio::test]
async fn user_deletes_only_own() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let own = factory::notification::NotificationFactory::for_user(db, user.id)
        .build()
        .await?;
    let foreign = factory::notification::NotificationFactory::for_user(db, other.id)
        .build()
        .await?;

    let service = NotificationService::new(db, None);

    service.delete(Recipient::User(user.id), own.id).await?;

    let result = service.delete(Recipient::User(user.id), foreign.id).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}

/// Tests an admin deleting a user's notification.
///
/// Expected: Ok, then Err(NotFound) on a second delete
#[tokio::test]
async fn admin_deletes_any() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let admin = factory::admin::create_admin(db).await?;
    let notification = factory::notification::NotificationFactory::for_user(db, user.id)
        .build()
        .await?;

    let service = NotificationService::new(db, None);

    service
        .delete(Recipient::Admin(admin.id), notification.id)
        .await?;

    let again = service
        .delete(Recipient::Admin(admin.id), notification.id)
        .await;
    assert!(matches!(again, Err(AppError::NotFound(_))));

    Ok(())
}
