use super::*;

/// Tests paging through trainers ordered by name.
///
/// Expected: total counts every row, pages hold at most per_page rows
#[tokio::test]
async fn pages_trainers_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Cleo", "Abe", "Bea"] {
        factory::trainer::TrainerFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = TrainerRepository::new(db);

    let (first_page, total) = repo.get_paginated(None, 0, 2).await?;
    assert_eq!(total, 3);
    let names: Vec<_> = first_page.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Abe", "Bea"]);

    let (second_page, _) = repo.get_paginated(None, 1, 2).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Cleo");

    Ok(())
}

/// Tests filtering trainers by status.
///
/// Expected: only active trainers are returned and counted
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::trainer::create_trainer(db).await?;
    factory::trainer::TrainerFactory::new(db)
        .status("inactive")
        .build()
        .await?;

    let (trainers, total) = TrainerRepository::new(db)
        .get_paginated(Some(CatalogStatus::Active), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(trainers[0].id, active.id);

    Ok(())
}
