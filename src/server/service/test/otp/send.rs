use super::*;

/// Tests issuing a code for a new email.
///
/// Expected: 6-digit code stored under the normalized email
#[tokio::test]
async fn issues_six_digit_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let code = OtpService::new(db).send(" Member@Example.com ").await?;

    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));

    let stored = OtpRepository::new(db)
        .find_by_email("member@example.com")
        .await?
        .unwrap();
    assert_eq!(stored.code, code);
    assert_eq!(stored.attempts, 0);

    Ok(())
}

/// Tests the resend cooldown.
///
/// Expected: Err(CooldownActive) with a positive wait, stored code unchanged
#[tokio::test]
async fn rejects_resend_within_cooldown() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::otp::OtpFactory::new(db, "member@example.com")
        .code("111111")
        .last_sent_at(Utc::now() - Duration::seconds(10))
        .build()
        .await?;

    let result = OtpService::new(db).send("member@example.com").await;

    match result {
        Err(AppError::OtpErr(OtpError::CooldownActive { retry_after_secs })) => {
            assert!(retry_after_secs > 0 && retry_after_secs <= 50);
        }
        other => panic!("expected cooldown error, got {:?}", other),
    }

    let stored = OtpRepository::new(db)
        .find_by_email("member@example.com")
        .await?
        .unwrap();
    assert_eq!(stored.code, "111111");

    Ok(())
}

/// Tests resending once the cooldown has passed.
///
/// Expected: Ok, previous record replaced and attempts reset
#[tokio::test]
async fn replaces_code_after_cooldown() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::otp::OtpFactory::new(db, "member@example.com")
        .code("111111")
        .attempts(2)
        .last_sent_at(Utc::now() - Duration::seconds(61))
        .build()
        .await?;

    let code = OtpService::new(db).send("member@example.com").await?;

    let stored = OtpRepository::new(db)
        .find_by_email("member@example.com")
        .await?
        .unwrap();
    assert_eq!(stored.code, code);
    assert_eq!(stored.attempts, 0);

    Ok(())
}

/// Tests that a failed delivery doesn't leave a code behind.
///
/// Expected: Err(MailErr), no stored record, and an immediate retry succeeds
/// without hitting the cooldown
#[tokio::test]
async fn discards_code_when_delivery_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OtpService::new(db);

    let failed = service
        .issue("member@example.com", &Mailer::undeliverable())
        .await;
    assert!(matches!(failed, Err(AppError::MailErr(_))));
    assert!(OtpRepository::new(db)
        .find_by_email("member@example.com")
        .await?
        .is_none());

    service
        .issue("member@example.com", &Mailer::disabled())
        .await?;
    assert!(OtpRepository::new(db)
        .find_by_email("member@example.com")
        .await?
        .is_some());

    Ok(())
}

/// Tests that issue still honours the cooldown.
///
/// Expected: Err(CooldownActive) and the existing code is kept
#[tokio::test]
async fn issue_keeps_existing_code_during_cooldown() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Otp).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::otp::OtpFactory::new(db, "member@example.com")
        .code("111111")
        .last_sent_at(Utc::now() - Duration::seconds(10))
        .build()
        .await?;

    let result = OtpService::new(db)
        .issue("member@example.com", &Mailer::undeliverable())
        .await;

    assert!(matches!(
        result,
        Err(AppError::OtpErr(OtpError::CooldownActive { .. }))
    ));

    let stored = OtpRepository::new(db)
        .find_by_email("member@example.com")
        .await?
        .unwrap();
    assert_eq!(stored.code, "111111");

    Ok(())
}
