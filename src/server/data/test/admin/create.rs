use super::*;

/// Tests creating an admin and reading it back by id and email.
///
/// Expected: Ok with the stored admin returned by both lookups
#[tokio::test]
async fn creates_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let admin = repo
        .create(CreateAdminParams {
            name: "Owner".to_string(),
            email: "owner@studio.test".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert_eq!(repo.find_by_id(admin.id).await?, Some(admin.clone()));
    assert_eq!(repo.find_by_email("owner@studio.test").await?, Some(admin));

    Ok(())
}
