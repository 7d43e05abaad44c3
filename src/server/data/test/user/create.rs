use super::*;

/// Tests creating a user.
///
/// Expected: Ok with all fields stored and timestamps set
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "hash".to_string(),
            phone: Some("555-0100".to_string()),
        })
        .await?;

    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.phone.as_deref(), Some("555-0100"));

    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests that the unique email constraint is enforced.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            name: "Other".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            phone: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
