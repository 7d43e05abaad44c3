use super::*;

/// Tests admin_exists before and after an admin is created.
///
/// Expected: false on an empty table, true afterwards
#[tokio::test]
async fn reports_whether_any_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    assert!(!repo.admin_exists().await?);

    factory::admin::create_admin(db).await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}
