use super::*;

/// Tests confirming an order with the emailed code.
///
/// Expected: order confirmed, user notified, every admin notified and pushed
#[tokio::test]
async fn confirms_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let admin = factory::admin::create_admin(db).await?;
    let membership = factory::membership::create_membership(db).await?;

    let hub = NotificationHub::new();
    let mut admin_rx = hub.join(&format!("admin_{}", admin.id)).await;
    let mut user_rx = hub.join(&format!("user_{}", user.id)).await;

    let mailer = Mailer::disabled();
    let service = OrderService::new(db, &mailer, Some(&hub));

    let order = service
        .create(PlaceOrderParams {
            user_id: user.id,
            item_kind: ItemKind::Membership,
            item_id: membership.id,
        })
        .await?;
    let code = stored_code(db, &user.email).await;

    let confirmed = service.verify(user.id, order.id, &code).await?;

    assert_eq!(confirmed.status, OrderStatus::Confirmed);
    assert!(confirmed.confirmed_at.is_some());

    assert!(user_rx.try_recv().is_ok());
    assert!(admin_rx.try_recv().is_ok());

    let notifications = NotificationService::new(db, None);
    let user_inbox = notifications
        .get_paginated(Recipient::User(user.id), 0, 10)
        .await?;
    assert_eq!(user_inbox.total, 1);
    assert_eq!(user_inbox.notifications[0].title, "Order confirmed");

    let admin_inbox = notifications
        .get_paginated(Recipient::Admin(admin.id), 0, 10)
        .await?;
    assert_eq!(admin_inbox.total, 1);
    assert_eq!(admin_inbox.notifications[0].title, "New order");

    Ok(())
}

/// Tests verifying an order that was already confirmed.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_non_pending_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, order) = factory::helpers::create_confirmed_membership_order(db).await?;
    factory::otp::OtpFactory::new(db, user.email.clone())
        .code("123456")
        .build()
        .await?;

    let mailer = Mailer::disabled();
    let result = OrderService::new(db, &mailer, None)
        .verify(user.id, order.id, "123456")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a wrong code.
///
/// Expected: Err(InvalidCode) and the order stays pending
#[tokio::test]
async fn wrong_code_keeps_order_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;
    factory::otp::OtpFactory::new(db, user.email.clone())
        .code("123456")
        .build()
        .await?;

    let mailer = Mailer::disabled();
    let service = OrderService::new(db, &mailer, None);

    let result = service.verify(user.id, order.id, "654321").await;
    assert!(matches!(
        result,
        Err(AppError::OtpErr(OtpError::InvalidCode { remaining: 2 }))
    ));

    let orders = service.get_paginated_for_user(user.id, 0, 10).await?;
    assert_eq!(orders.orders[0].status, OrderStatus::Pending);

    Ok(())
}

/// Tests verifying someone else's order.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn hides_other_users_orders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, owner.id).await?;

    let mailer = Mailer::disabled();
    let result = OrderService::new(db, &mailer, None)
        .verify(intruder.id, order.id, "123456")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
