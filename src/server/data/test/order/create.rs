use super::*;

/// Tests that new orders start pending with the item snapshot.
///
/// Expected: Ok with status "pending" and no confirmed_at
#[tokio::test]
async fn creates_pending_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let class = factory::fitness_class::create_class(db).await?;

    let order = OrderRepository::new(db)
        .create(CreateOrderParams {
            user_id: user.id,
            item_kind: ItemKind::Class,
            item_id: class.id,
            item_name: class.name.clone(),
            amount: class.price,
        })
        .await?;

    assert_eq!(order.user_id, user.id);
    assert_eq!(order.item_kind, "class");
    assert_eq!(order.item_name, class.name);
    assert_eq!(order.amount, class.price);
    assert_eq!(order.status, "pending");
    assert!(order.confirmed_at.is_none());

    Ok(())
}
