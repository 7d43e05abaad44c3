use super::*;

/// Tests totals over confirmed orders only, broken down by item kind.
///
/// Expected: pending and cancelled orders ignored, every kind listed
#[tokio::test]
async fn sums_confirmed_orders_by_kind() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();

    factory::order::OrderFactory::new(db, user.id)
        .item("class", 1, "Spin")
        .amount(1_500)
        .confirmed_at(now)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, user.id)
        .item("class", 2, "Boxing")
        .amount(2_000)
        .confirmed_at(now)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, user.id)
        .item("membership", 1, "Monthly")
        .amount(5_000)
        .confirmed_at(now)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, user.id)
        .amount(9_999)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, user.id)
        .amount(9_999)
        .status("cancelled")
        .build()
        .await?;

    let summary = RevenueService::new(db).summary(None, None).await?;

    assert_eq!(summary.total, 8_500);
    assert_eq!(summary.order_count, 3);
    assert_eq!(summary.by_kind.len(), 3);

    let class = summary
        .by_kind
        .iter()
        .find(|kind| kind.item_kind == ItemKind::Class)
        .unwrap();
    assert_eq!(class.total, 3_500);
    assert_eq!(class.order_count, 2);

    let program = summary
        .by_kind
        .iter()
        .find(|kind| kind.item_kind == ItemKind::Program)
        .unwrap();
    assert_eq!(program.total, 0);

    Ok(())
}

/// Tests the date range bounds.
///
/// Expected: start inclusive, end exclusive
#[tokio::test]
async fn respects_half_open_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let from = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();

    factory::order::OrderFactory::new(db, user.id)
        .amount(1_000)
        .confirmed_at(from)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, user.id)
        .amount(2_000)
        .confirmed_at(to)
        .build()
        .await?;

    let summary = RevenueService::new(db)
        .summary(Some(from), Some(to))
        .await?;

    assert_eq!(summary.total, 1_000);
    assert_eq!(summary.order_count, 1);

    Ok(())
}

/// Tests an inverted range.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inverted_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let from = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();

    let result = RevenueService::new(db).summary(Some(from), Some(to)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
