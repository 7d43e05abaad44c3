use super::*;

/// Tests marking a single notification read.
///
/// Expected: Ok(Some) with is_read true, Ok(None) for a missing id
#[tokio::test]
async fn marks_one_read() -> Result<(), DbErr> {
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

    let repo = NotificationRepository::new(db);

    let updated = repo.mark_read(notification.id).await?.unwrap();
    assert!(updated.is_read);

    assert!(repo.mark_read(999).await?.is_none());

    Ok(())
}

/// Tests marking everything read for one recipient.
///
/// Expected: only the recipient's unread rows change
#[tokio::test]
async fn marks_all_read_for_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    for _ in 0..2 {
        factory::notification::NotificationFactory::for_user(db, user.id)
            .build()
            .await?;
    }
    factory::notification::NotificationFactory::for_user(db, user.id)
        .read(true)
        .build()
        .await?;
    factory::notification::NotificationFactory::for_user(db, other.id)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.mark_all_read(Recipient::User(user.id)).await?, 2);
    assert_eq!(repo.count_unread(Recipient::User(user.id)).await?, 0);
    assert_eq!(repo.count_unread(Recipient::User(other.id)).await?, 1);

    Ok(())
}

/// Tests deleting a notification.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin::create_admin(db).await?;
    let notification = factory::notification::NotificationFactory::for_admin(db, admin.id)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);

    assert!(repo.delete(notification.id).await?);
    assert!(!repo.delete(notification.id).await?);

    Ok(())
}
