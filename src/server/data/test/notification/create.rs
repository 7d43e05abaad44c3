use super::*;

/// Tests that defaults are stored for type and icon.
///
/// Expected: unread, type "neutral", icon "bell", admin column empty
#[tokio::test]
async fn creates_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let notification = NotificationRepository::new(db)
        .create(&CreateNotificationParams::new(
            Recipient::User(user.id),
            "Welcome",
            "Thanks for joining",
        ))
        .await?;

    assert_eq!(notification.user_id, Some(user.id));
    assert_eq!(notification.admin_id, None);
    assert_eq!(notification.notification_type, "neutral");
    assert_eq!(notification.icon, "bell");
    assert!(!notification.is_read);

    Ok(())
}

/// Tests an admin notification with explicit type and icon.
///
/// Expected: admin column set and the given type and icon stored
#[tokio::test]
async fn creates_admin_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::admin::create_admin(db).await?;

    let notification = NotificationRepository::new(db)
        .create(
            &CreateNotificationParams::new(Recipient::Admin(admin.id), "New order", "Order #1")
                .with_type("success")
                .with_icon("cart"),
        )
        .await?;

    assert_eq!(notification.admin_id, Some(admin.id));
    assert_eq!(notification.user_id, None);
    assert_eq!(notification.notification_type, "success");
    assert_eq!(notification.icon, "cart");

    Ok(())
}
