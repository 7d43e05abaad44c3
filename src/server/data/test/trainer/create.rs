use super::*;

/// Tests creating a trainer.
///
/// Expected: Ok with status stored as its lowercase name
#[tokio::test]
async fn creates_trainer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerRepository::new(db)
        .create(params("Maya", CatalogStatus::Inactive))
        .await?;

    assert_eq!(trainer.name, "Maya");
    assert_eq!(trainer.specialization, "Yoga");
    assert_eq!(trainer.status, "inactive");
    assert_eq!(trainer.email.as_deref(), Some("maya@studio.test"));

    Ok(())
}
