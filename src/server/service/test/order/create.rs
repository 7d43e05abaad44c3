use super::*;

/// Tests placing an order for an active class.
///
/// Expected: pending order with the class's name and price, and an OTP issued
/// for the user's email
#[tokio::test]
async fn places_pending_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let class = factory::fitness_class::FitnessClassFactory::new(db)
        .name("Spin")
        .price(2_200)
        .build()
        .await?;

    let mailer = Mailer::disabled();
    let order = OrderService::new(db, &mailer, None)
        .create(PlaceOrderParams {
            user_id: user.id,
            item_kind: ItemKind::Class,
            item_id: class.id,
        })
        .await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.item_name, "Spin");
    assert_eq!(order.amount, 2_200);
    assert!(order.confirmed_at.is_none());

    assert_eq!(stored_code(db, &user.email).await.len(), 6);

    Ok(())
}

/// Tests ordering an inactive membership.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inactive_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let membership = factory::membership::MembershipFactory::new(db)
        .status("inactive")
        .build()
        .await?;

    let mailer = Mailer::disabled();
    let result = OrderService::new(db, &mailer, None)
        .create(PlaceOrderParams {
            user_id: user.id,
            item_kind: ItemKind::Membership,
            item_id: membership.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests ordering an item that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let mailer = Mailer::disabled();
    let result = OrderService::new(db, &mailer, None)
        .create(PlaceOrderParams {
            user_id: user.id,
            item_kind: ItemKind::Program,
            item_id: 77,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests placing a second order right after the first.
///
/// Expected: Ok; the first code is kept, and resending is rejected by the cooldown
#[tokio::test]
async fn second_order_reuses_recent_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checkout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let membership = factory::membership::create_membership(db).await?;

    let mailer = Mailer::disabled();
    let service = OrderService::new(db, &mailer, None);
    let params = PlaceOrderParams {
        user_id: user.id,
        item_kind: ItemKind::Membership,
        item_id: membership.id,
    };

    service.create(params.clone()).await?;
    let first_code = stored_code(db, &user.email).await;

    let second = service.create(params).await?;
    assert_eq!(stored_code(db, &user.email).await, first_code);

    let resend = service.resend_otp(user.id, second.id).await;
    assert!(matches!(
        resend,
        Err(AppError::OtpErr(OtpError::CooldownActive { .. }))
    ));

    Ok(())
}
