use super::*;

/// Tests listing every admin id.
///
/// Expected: Ok with all ids in ascending order, users excluded
#[tokio::test]
async fn returns_all_admin_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::admin::create_admin(db).await?;
    let second = factory::admin::create_admin(db).await?;
    factory::user::create_user(db).await?;

    let ids = AdminRepository::new(db).get_all_ids().await?;

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
