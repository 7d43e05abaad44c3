use super::*;

/// Tests bucketing a year's confirmed orders by month.
///
/// Expected: twelve buckets, orders from other years excluded
#[tokio::test]
async fn buckets_by_confirmation_month() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    for (month, amount) in [(1, 1_000), (1, 500), (12, 3_000)] {
        factory::order::OrderFactory::new(db, user.id)
            .amount(amount)
            .confirmed_at(Utc.with_ymd_and_hms(2025, month, 15, 12, 0, 0).unwrap())
            .build()
            .await?;
    }
    factory::order::OrderFactory::new(db, user.id)
        .amount(7_000)
        .confirmed_at(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
        .build()
        .await?;

    let monthly = RevenueService::new(db).monthly(2025).await?;

    assert_eq!(monthly.year, 2025);
    assert_eq!(monthly.months.len(), 12);
    assert_eq!(monthly.months[0].month, 1);
    assert_eq!(monthly.months[0].total, 1_500);
    assert_eq!(monthly.months[0].order_count, 2);
    assert_eq!(monthly.months[5].total, 0);
    assert_eq!(monthly.months[11].month, 12);
    assert_eq!(monthly.months[11].total, 3_000);

    Ok(())
}
