use super::*;

/// Tests the admin status override.
///
/// Expected: confirming stamps confirmed_at, cancelling clears it
#[tokio::test]
async fn confirms_then_cancels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;

    let mailer = Mailer::disabled();
    let service = OrderService::new(db, &mailer, None);

    let confirmed = service
        .update_status(order.id, OrderStatus::Confirmed)
        .await?
        .unwrap();
    assert_eq!(confirmed.status, OrderStatus::Confirmed);
    assert!(confirmed.confirmed_at.is_some());

    let cancelled = service
        .update_status(order.id, OrderStatus::Cancelled)
        .await?
        .unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert!(cancelled.confirmed_at.is_none());

    assert!(service
        .update_status(999, OrderStatus::Cancelled)
        .await?
        .is_none());

    Ok(())
}

/// Tests the admin order listing filter.
///
/// Expected: only pending orders when filtered by pending
#[tokio::test]
async fn lists_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::helpers::create_confirmed_membership_order(db).await?;
    let pending = factory::order::create_order(db, user.id).await?;

    let mailer = Mailer::disabled();
    let orders = OrderService::new(db, &mailer, None)
        .get_paginated(Some(OrderStatus::Pending), 0, 10)
        .await?;

    assert_eq!(orders.total, 1);
    assert_eq!(orders.orders[0].id, pending.id);
    assert_eq!(orders.total_pages, 1);

    Ok(())
}
