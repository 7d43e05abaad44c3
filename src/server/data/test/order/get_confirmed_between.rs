use super::*;

/// Tests the half-open confirmation window.
///
/// Expected: orders confirmed at `from` included, at `to` excluded, pending ignored
#[tokio::test]
async fn selects_confirmed_orders_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let from = Utc::now() - Duration::days(10);
    let to = Utc::now() - Duration::days(1);

    let at_start = factory::order::OrderFactory::new(db, user.id)
        .confirmed_at(from)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, user.id)
        .confirmed_at(to)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, user.id)
        .confirmed_at(from - Duration::days(1))
        .build()
        .await?;
    factory::order::create_order(db, user.id).await?;

    let repo = OrderRepository::new(db);

    let orders = repo.get_confirmed_between(Some(from), Some(to)).await?;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, at_start.id);

    let all = repo.get_confirmed_between(None, None).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}
