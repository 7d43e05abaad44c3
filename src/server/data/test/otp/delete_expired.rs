use super::*;

/// Tests the expiry sweep.
///
/// Expected: expired records removed, live records kept
#[tokio::test]
async fn deletes_only_expired_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::otp::OtpFactory::new(db, "stale@example.com")
        .expires_at(now - Duration::minutes(1))
        .build()
        .await?;
    let live = factory::otp::OtpFactory::new(db, "live@example.com")
        .build()
        .await?;

    let repo = OtpRepository::new(db);
    let deleted = repo.delete_expired(now).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_email("stale@example.com").await?.is_none());
    assert_eq!(
        repo.find_by_email("live@example.com").await?.map(|otp| otp.id),
        Some(live.id)
    );

    Ok(())
}

/// Tests the attempt counter cap and single delete.
///
/// Expected: increments stop at the cap, record gone after delete
#[tokio::test]
async fn caps_attempts_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let otp = factory::otp::OtpFactory::new(db, "member@example.com")
        .attempts(1)
        .build()
        .await?;

    let repo = OtpRepository::new(db);
    assert!(repo.increment_attempts(otp.id, 3).await?);
    assert!(repo.increment_attempts(otp.id, 3).await?);
    assert!(!repo.increment_attempts(otp.id, 3).await?);
    assert_eq!(repo.get_by_id(otp.id).await?.unwrap().attempts, 3);

    assert_eq!(repo.delete(otp.id).await?, 1);
    assert_eq!(repo.delete(otp.id).await?, 0);
    assert!(repo.find_by_email("member@example.com").await?.is_none());

    Ok(())
}

/// Tests consuming a code.
///
/// Expected: wrong code leaves the record, right code removes it exactly once
#[tokio::test]
async fn consumes_matching_code_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let otp = factory::otp::OtpFactory::new(db, "member@example.com")
        .code("482913")
        .build()
        .await?;

    let repo = OtpRepository::new(db);
    assert!(!repo.consume(otp.id, "000000", 3).await?);
    assert!(repo.consume(otp.id, "482913", 3).await?);
    assert!(!repo.consume(otp.id, "482913", 3).await?);

    Ok(())
}

/// Tests deleting a code by value.
///
/// Expected: a stale code leaves the newer record in place
#[tokio::test]
async fn delete_code_keeps_newer_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::otp::OtpFactory::new(db, "member@example.com")
        .code("222222")
        .build()
        .await?;

    let repo = OtpRepository::new(db);
    assert_eq!(repo.delete_code("member@example.com", "111111").await?, 0);
    assert_eq!(repo.delete_code("member@example.com", "222222").await?, 1);
    assert!(repo.find_by_email("member@example.com").await?.is_none());

    Ok(())
}
