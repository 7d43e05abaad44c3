use super::*;

/// Tests marking one's own notification read.
///
/// Expected: Ok with is_read true
#[tokio::test]
async fn marks_own_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let notification = factory::notification::NotificationFactory::for_user(db, user.id)
        .build()
        .await?;

    let updated = NotificationService::new(db, None)
        .mark_read(Recipient::User(user.id), notification.id)
        .await?;

    assert!(updated.is_read);

    Ok(())
}

/// Tests marking another recipient's notification read.
///
/// Expected: Err(AccessDenied) and the notification stays unread
#[tokio::test]
async fn rejects_foreign_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let notification = factory::notification::NotificationFactory::for_user(db, owner.id)
        .build()
        .await?;

    let service = NotificationService::new(db, None);
    let result = service
        .mark_read(Recipient::User(other.id), notification.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    let page = service
        .get_paginated(Recipient::User(owner.id), 0, 10)
        .await?;
    assert_eq!(page.unread, 1);

    Ok(())
}

/// Tests that an admin can't mark a user's notification through the admin inbox.
///
/// Expected: Err(AccessDenied), since the ids match but the recipient kind differs
#[tokio::test]
async fn recipient_kind_matters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let notification = factory::notification::NotificationFactory::for_user(db, user.id)
        .build()
        .await?;

    let result = NotificationService::new(db, None)
        .mark_read(Recipient::Admin(user.id), notification.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}
