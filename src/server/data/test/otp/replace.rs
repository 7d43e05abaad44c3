use super::*;

/// Tests storing the first code for an email.
///
/// Expected: Ok with zero attempts and the given expiry
#[tokio::test]
async fn inserts_new_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let otp = OtpRepository::new(db)
        .replace("member@example.com", "482913", now + Duration::minutes(5), now)
        .await?;

    assert_eq!(otp.email, "member@example.com");
    assert_eq!(otp.code, "482913");
    assert_eq!(otp.attempts, 0);
    assert!(otp.expires_at > now);

    Ok(())
}

/// Tests that a resend replaces the existing record.
///
/// Expected: one row, new code, attempts reset to zero
#[tokio::test]
async fn replaces_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::otp::OtpFactory::new(db, "member@example.com")
        .code("111111")
        .attempts(2)
        .build()
        .await?;

    let now = Utc::now();
    let otp = OtpRepository::new(db)
        .replace("member@example.com", "222222", now + Duration::minutes(5), now)
        .await?;

    assert_eq!(otp.code, "222222");
    assert_eq!(otp.attempts, 0);
    assert_eq!(Otp::find().count(db).await?, 1);

    Ok(())
}
