use super::*;

/// Tests a matching answer in a different case.
///
/// Expected: Ok(())
#[tokio::test]
async fn accepts_case_insensitive_answer() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let captcha = CaptchaSession::new(session);
    captcha.set_phrase("aB3xY").await?;

    assert!(captcha.verify(Some(" Ab3Xy ")).await.is_ok());

    Ok(())
}

/// Tests that a phrase can only be answered once.
///
/// Expected: Err(ValidationError::Captcha) on the second attempt
#[tokio::test]
async fn consumes_phrase() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let captcha = CaptchaSession::new(session);
    captcha.set_phrase("aB3xY").await?;

    captcha.verify(Some("aB3xY")).await?;
    let result = captcha.verify(Some("aB3xY")).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Captcha))
    ));

    Ok(())
}

/// Tests wrong and missing answers.
///
/// Verifies that a wrong answer also consumes the phrase, so guessing requires a
/// new image each time.
///
/// Expected: Err(ValidationError::Captcha)
#[tokio::test]
async fn rejects_wrong_or_missing_answer() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let captcha = CaptchaSession::new(session);

    assert!(captcha.verify(Some("anything")).await.is_err());

    captcha.set_phrase("aB3xY").await?;
    assert!(captcha.verify(Some("wrong")).await.is_err());
    assert!(captcha.verify(Some("aB3xY")).await.is_err());

    captcha.set_phrase("aB3xY").await?;
    assert!(captcha.verify(None).await.is_err());

    Ok(())
}
