use super::*;

fn params(trainer_id: Option<i32>) -> ClassParams {
    ClassParams {
        name: "HIIT".to_string(),
        description: "Intervals".to_string(),
        trainer_id,
        schedule: "Mon 18:00".to_string(),
        starts_at: None,
        duration_minutes: 45,
        capacity: 20,
        price: 1_500,
        status: CatalogStatus::Active,
    }
}

/// Tests creating a class with a trainer.
///
/// Expected: Ok with the trainer's name resolved
#[tokio::test]
async fn creates_class_with_trainer_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::trainer::TrainerFactory::new(db)
        .name("Sam")
        .build()
        .await?;

    let class = FitnessClassService::new(db)
        .create(params(Some(trainer.id)))
        .await?;

    assert_eq!(class.trainer_id, Some(trainer.id));
    assert_eq!(class.trainer_name.as_deref(), Some("Sam"));

    Ok(())
}

/// Tests referencing a trainer that doesn't exist.
///
/// Expected: Err(BadRequest) on create and update
#[tokio::test]
async fn rejects_unknown_trainer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::fitness_class::create_class(db).await?;
    let service = FitnessClassService::new(db);

    let created = service.create(params(Some(404))).await;
    assert!(matches!(created, Err(AppError::BadRequest(_))));

    let updated = service.update(existing.id, params(Some(404))).await;
    assert!(matches!(updated, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests field validation.
///
/// Expected: Err(BadRequest) for zero capacity
#[tokio::test]
async fn rejects_zero_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut invalid = params(None);
    invalid.capacity = 0;

    let result = FitnessClassService::new(db).create(invalid).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that deleting a trainer leaves the class without a trainer.
///
/// Expected: class survives with trainer_id and trainer_name None
#[tokio::test]
async fn trainer_delete_detaches_class() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::trainer::create_trainer(db).await?;
    let class = FitnessClassService::new(db)
        .create(params(Some(trainer.id)))
        .await?;

    assert!(TrainerService::new(db).delete(trainer.id).await?);

    let class = FitnessClassService::new(db)
        .get_by_id(class.id, false)
        .await?
        .unwrap();
    assert_eq!(class.trainer_id, None);
    assert_eq!(class.trainer_name, None);

    Ok(())
}
