use super::*;

/// Tests that deleting a trainer clears references from classes and programs.
///
/// Expected: Ok(true), classes and programs survive with trainer_id None
#[tokio::test]
async fn deletes_trainer_and_clears_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::trainer::create_trainer(db).await?;
    let class = factory::fitness_class::FitnessClassFactory::new(db)
        .trainer_id(Some(trainer.id))
        .build()
        .await?;
    let program = factory::program::ProgramFactory::new(db)
        .trainer_id(Some(trainer.id))
        .build()
        .await?;

    let deleted = TrainerRepository::new(db).delete(trainer.id).await?;
    assert!(deleted);

    let class = entity::prelude::FitnessClass::find_by_id(class.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(class.trainer_id, None);

    let program = entity::prelude::Program::find_by_id(program.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(program.trainer_id, None);

    assert!(entity::prelude::Trainer::find_by_id(trainer.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a trainer that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_trainer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!TrainerRepository::new(db).delete(42).await?);

    Ok(())
}
