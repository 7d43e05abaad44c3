use super::*;

/// Tests listing a user's notifications with the unread count.
///
/// Expected: only the user's rows, newest first, unread counted separately
#[tokio::test]
async fn lists_recipient_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let admin = factory::admin::create_admin(db).await?;

    let first = factory::notification::NotificationFactory::for_user(db, user.id)
        .read(true)
        .build()
        .await?;
    let second = factory::notification::NotificationFactory::for_user(db, user.id)
        .build()
        .await?;
    factory::notification::NotificationFactory::for_admin(db, admin.id)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let recipient = Recipient::User(user.id);

    let (notifications, total) = repo.get_paginated_for(recipient, 0, 10).await?;
    assert_eq!(total, 2);
    assert_eq!(notifications[0].id, second.id);
    assert_eq!(notifications[1].id, first.id);

    assert_eq!(repo.count_unread(recipient).await?, 1);
    assert_eq!(repo.count_unread(Recipient::Admin(admin.id)).await?, 1);

    Ok(())
}
