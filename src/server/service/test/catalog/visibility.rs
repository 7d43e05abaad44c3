use super::*;

/// Tests that public reads hide inactive items.
///
/// Expected: None for an inactive membership when active_only, Some otherwise
#[tokio::test]
async fn hides_inactive_item_from_public() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let membership = factory::membership::MembershipFactory::new(db)
        .status("inactive")
        .build()
        .await?;

    let service = MembershipService::new(db);

    assert!(service.get_by_id(membership.id, true).await?.is_none());
    assert!(service.get_by_id(membership.id, false).await?.is_some());

    Ok(())
}

/// Tests public and admin trainer listings.
///
/// Expected: public page counts only active trainers, admin page counts all
#[tokio::test]
async fn lists_active_trainers_publicly() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TrainerService::new(db);
    service
        .create(TrainerParams {
            name: "Active".to_string(),
            email: None,
            phone: None,
            specialization: "Pilates".to_string(),
            bio: None,
            status: CatalogStatus::Active,
        })
        .await?;
    factory::trainer::TrainerFactory::new(db)
        .status("inactive")
        .build()
        .await?;

    let public = service.get_paginated(true, 0, 10).await?;
    assert_eq!(public.total, 1);
    assert_eq!(public.trainers[0].name, "Active");

    let admin = service.get_paginated(false, 0, 10).await?;
    assert_eq!(admin.total, 2);

    Ok(())
}

/// Tests the page size clamp.
///
/// Expected: zero entries becomes one per page
#[tokio::test]
async fn clamps_page_size() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::membership::create_membership(db).await?;
    factory::membership::create_membership(db).await?;

    let page = MembershipService::new(db).get_paginated(true, 0, 0).await?;

    assert_eq!(page.per_page, 1);
    assert_eq!(page.memberships.len(), 1);
    assert_eq!(page.total_pages, 2);

    Ok(())
}
