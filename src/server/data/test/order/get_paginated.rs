use super::*;

/// Tests a user's order history.
///
/// Expected: only the user's orders, newest first
#[tokio::test]
async fn lists_user_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let older = factory::order::OrderFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = factory::order::create_order(db, user.id).await?;
    factory::order::create_order(db, other.id).await?;

    let (orders, total) = OrderRepository::new(db)
        .get_paginated_by_user(user.id, 0, 10)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(orders[0].id, newer.id);
    assert_eq!(orders[1].id, older.id);

    Ok(())
}

/// Tests the admin listing status filter.
///
/// Expected: only confirmed orders when filtered, all orders otherwise
#[tokio::test]
async fn filters_all_orders_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, confirmed) = factory::helpers::create_confirmed_membership_order(db).await?;
    factory::order::create_order(db, user.id).await?;

    let repo = OrderRepository::new(db);

    let (orders, total) = repo
        .get_paginated(Some(OrderStatus::Confirmed), 0, 10)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(orders[0].id, confirmed.id);

    let (_, total) = repo.get_paginated(None, 0, 10).await?;
    assert_eq!(total, 2);

    Ok(())
}
