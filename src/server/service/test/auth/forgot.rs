use super::*;

fn forgot_param(email: &str) -> ForgotPasswordParam {
    ForgotPasswordParam {
        email: email.to_string(),
        captcha: None,
    }
}

/// Tests the flow without a configured mail transport.
///
/// Expected: Err(AuthError::MailDisabled)
#[tokio::test]
async fn fails_when_mail_disabled() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let links = reset_links();
    let service = PasswordResetService::new(db, None, &links);
    let result = service
        .forgot(session, forgot_param("steve@example.com"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MailDisabled))
    ));

    Ok(())
}

/// Tests sending a reset link to a registered address.
///
/// Verifies the recipient, that the body carries a link to the reset route and that
/// the send time is recorded for the throttle.
///
/// Expected: Ok(()) with one mail sent
#[tokio::test]
async fn mails_reset_link() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::set_option(db, "auth_captcha", "false").await?;
    let user = factory::create_user(db).await?;

    let mailer = RecordingMailer::default();
    let links = reset_links();
    let service = PasswordResetService::new(db, Some(&mailer), &links);
    service.forgot(session, forgot_param(&user.email)).await?;

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, user.email);
    assert!(sent[0]
        .body
        .contains("https://skins.example.com/auth/reset/"));
    assert!(MailThrottleSession::new(session)
        .last_sent_at()
        .await?
        .is_some());

    Ok(())
}

/// Tests the resend throttle.
///
/// Expected: Err(AuthError::MailTooFrequent) on the second request
#[tokio::test]
async fn throttles_repeated_requests() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::set_option(db, "auth_captcha", "false").await?;
    let user = factory::create_user(db).await?;

    let mailer = RecordingMailer::default();
    let links = reset_links();
    let service = PasswordResetService::new(db, Some(&mailer), &links);
    service.forgot(session, forgot_param(&user.email)).await?;
    let result = service.forgot(session, forgot_param(&user.email)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MailTooFrequent))
    ));
    assert_eq!(mailer.sent().len(), 1);

    Ok(())
}

/// Tests that the throttle expires after a minute.
///
/// Expected: Ok(()) when the last mail is older than the interval
#[tokio::test]
async fn allows_request_after_interval() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::set_option(db, "auth_captcha", "false").await?;
    let user = factory::create_user(db).await?;
    MailThrottleSession::new(session)
        .record(chrono::Utc::now().timestamp() - 61)
        .await?;

    let mailer = RecordingMailer::default();
    let links = reset_links();
    let service = PasswordResetService::new(db, Some(&mailer), &links);

    assert!(service
        .forgot(session, forgot_param(&user.email))
        .await
        .is_ok());

    Ok(())
}

/// Tests an address nobody registered.
///
/// Expected: Err(AuthError::Unregistered)
#[tokio::test]
async fn fails_for_unregistered_email() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::set_option(db, "auth_captcha", "false").await?;

    let mailer = RecordingMailer::default();
    let links = reset_links();
    let service = PasswordResetService::new(db, Some(&mailer), &links);
    let result = service
        .forgot(session, forgot_param("nobody@example.com"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unregistered))
    ));
    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Tests a failing mail transport.
///
/// Verifies that the failure is reported with code 2 and does not start the
/// resend throttle.
///
/// Expected: Err(AuthError::MailFailed)
#[tokio::test]
async fn reports_transport_failure() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::set_option(db, "auth_captcha", "false").await?;
    let user = factory::create_user(db).await?;

    let links = reset_links();
    let service = PasswordResetService::new(db, Some(&FailingMailer), &links);
    let result = service.forgot(session, forgot_param(&user.email)).await;

    match result {
        Err(AppError::AuthErr(err @ AuthError::MailFailed(_))) => assert_eq!(err.code(), 2),
        other => panic!("expected MailFailed, got {:?}", other),
    }
    assert!(MailThrottleSession::new(session)
        .last_sent_at()
        .await?
        .is_none());

    Ok(())
}

/// Tests email and CAPTCHA validation.
///
/// Expected: Err(ValidationError) for a malformed address and a missing CAPTCHA
#[tokio::test]
async fn validates_email_and_captcha() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;

    let mailer = RecordingMailer::default();
    let links = reset_links();
    let service = PasswordResetService::new(db, Some(&mailer), &links);

    assert!(matches!(
        service.forgot(session, forgot_param("nope")).await,
        Err(AppError::ValidationErr(ValidationError::InvalidEmail(
            "email"
        )))
    ));
    assert!(matches!(
        service.forgot(session, forgot_param(&user.email)).await,
        Err(AppError::ValidationErr(ValidationError::Captcha))
    ));

    Ok(())
}

/// Tests requesting a reset mail with the address typed in a different case.
///
/// Expected: Ok(()) with the mail sent to the stored address
#[tokio::test]
async fn finds_account_by_email_in_any_case() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::set_option(db, "auth_captcha", "false").await?;
    factory::user::UserFactory::new(db)
        .email("steve@example.com")
        .build()
        .await?;

    let mailer = RecordingMailer::default();
    let links = reset_links();
    PasswordResetService::new(db, Some(&mailer), &links)
        .forgot(session, forgot_param("Steve@EXAMPLE.com"))
        .await?;

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "steve@example.com");

    Ok(())
}
