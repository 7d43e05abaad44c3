use super::*;

fn params(trainer_id: Option<i32>) -> ProgramParams {
    ProgramParams {
        name: "Couch to 5k".to_string(),
        description: "Nine week running plan".to_string(),
        trainer_id,
        duration_weeks: 9,
        price: 9_900,
        status: CatalogStatus::Active,
    }
}

/// Tests the create, update and delete round for a program.
///
/// Expected: each step reflects in get_by_id
#[tokio::test]
async fn creates_updates_and_deletes_program() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::trainer::create_trainer(db).await?;
    let repo = ProgramRepository::new(db);

    let program = repo.create(params(Some(trainer.id))).await?;
    let (_, found_trainer) = repo.get_by_id(program.id).await?.unwrap();
    assert_eq!(found_trainer.map(|t| t.id), Some(trainer.id));

    let mut changes = params(None);
    changes.duration_weeks = 12;
    let updated = repo.update(program.id, changes).await?.unwrap();
    assert_eq!(updated.duration_weeks, 12);
    assert_eq!(updated.trainer_id, None);

    assert!(repo.delete(program.id).await?);
    assert!(repo.get_by_id(program.id).await?.is_none());

    Ok(())
}

/// Tests listing programs by status.
///
/// Expected: only the active program is returned
#[tokio::test]
async fn lists_programs_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::program::create_program(db).await?;
    factory::program::ProgramFactory::new(db)
        .status("inactive")
        .build()
        .await?;

    let (programs, total) = ProgramRepository::new(db)
        .get_paginated(Some(CatalogStatus::Active), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(programs[0].0.id, active.id);

    Ok(())
}
