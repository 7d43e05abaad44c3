use super::*;

/// Tests that dispatch pushes the stored notification to the recipient's room.
///
/// Expected: one `notification:new` frame carrying the stored record
#[tokio::test]
async fn pushes_to_recipient_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let hub = NotificationHub::new();
    let mut rx = hub.join(&format!("user_{}", user.id)).await;

    let notification = NotificationService::new(db, Some(&hub))
        .dispatch(CreateNotificationParams::new(
            Recipient::User(user.id),
            "Class moved",
            "Tuesday yoga starts at 08:00",
        ))
        .await?;

    let frame = rx.try_recv().unwrap();
    let event: NotificationEventDto = serde_json::from_str(&frame).unwrap();

    assert_eq!(event.event, NOTIFICATION_NEW_EVENT);
    assert_eq!(event.data.id, notification.id);
    assert_eq!(event.data.notification_type, "neutral");
    assert_eq!(event.data.icon, "bell");
    assert!(!event.data.is_read);

    Ok(())
}

/// Tests dispatch with no hub and with nobody listening.
///
/// Expected: Ok both times, the notification is still stored
#[tokio::test]
async fn stores_without_live_transport() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let hub = NotificationHub::new();

    NotificationService::new(db, None)
        .dispatch(CreateNotificationParams::new(
            Recipient::User(user.id),
            "Offline",
            "No hub",
        ))
        .await?;
    NotificationService::new(db, Some(&hub))
        .dispatch(CreateNotificationParams::new(
            Recipient::User(user.id),
            "Offline",
            "Empty room",
        ))
        .await?;

    let page = NotificationService::new(db, None)
        .get_paginated(Recipient::User(user.id), 0, 10)
        .await?;
    assert_eq!(page.total, 2);
    assert_eq!(page.unread, 2);

    Ok(())
}

/// Tests that another recipient's room receives nothing.
///
/// Expected: the admin room stays empty when a user is notified
#[tokio::test]
async fn does_not_leak_to_other_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let admin = factory::admin::create_admin(db).await?;
    let hub = NotificationHub::new();
    let mut admin_rx = hub.join(&format!("admin_{}", admin.id)).await;

    NotificationService::new(db, Some(&hub))
        .dispatch(CreateNotificationParams::new(
            Recipient::User(user.id),
            "Hello",
            "Just for the user",
        ))
        .await?;

    assert!(admin_rx.try_recv().is_err());

    Ok(())
}

/// Tests broadcasting to every admin.
///
/// Expected: one notification per admin, each pushed to its own room
#[tokio::test]
async fn notifies_all_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::admin::create_admin(db).await?;
    let second = factory::admin::create_admin(db).await?;
    let hub = NotificationHub::new();
    let mut first_rx = hub.join(&format!("admin_{}", first.id)).await;
    let mut second_rx = hub.join(&format!("admin_{}", second.id)).await;

    let notifications = NotificationService::new(db, Some(&hub))
        .notify_all_admins("New order", "Jo ordered Monthly", Some("info"), Some("cart"))
        .await?;

    assert_eq!(notifications.len(), 2);
    assert!(notifications
        .iter()
        .all(|n| n.notification_type == "info" && n.icon == "cart"));
    assert!(first_rx.try_recv().is_ok());
    assert!(second_rx.try_recv().is_ok());

    Ok(())
}

/// Tests admin fan-out when one dispatch fails.
///
/// Expected: the failing admin is skipped and the next admin is still notified
#[tokio::test]
async fn continues_after_failed_admin_dispatch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin::create_admin(db).await?;
    let hub = NotificationHub::new();
    let mut admin_rx = hub.join(&format!("admin_{}", admin.id)).await;

    let notifications = NotificationService::new(db, Some(&hub))
        .notify_admins(
            &[999_999, admin.id],
            "New order",
            "Jo ordered Monthly",
            Some("info"),
            Some("cart"),
        )
        .await;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].recipient, Recipient::Admin(admin.id));
    assert!(admin_rx.try_recv().is_ok());

    Ok(())
}

/// Tests an admin message to a user that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn send_to_missing_user_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NotificationService::new(db, None)
        .send_to_user(CreateNotificationParams::new(
            Recipient::User(404),
            "Hi",
            "Anyone there?",
        ))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
