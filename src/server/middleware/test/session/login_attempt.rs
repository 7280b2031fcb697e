use super::*;

/// Tests counting and resetting login failures.
///
/// Expected: counter increments from zero and resets to zero
#[tokio::test]
async fn increments_and_resets() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let attempts = LoginAttemptSession::new(session);
    assert_eq!(attempts.get().await?, 0);

    assert_eq!(attempts.increment().await?, 1);
    assert_eq!(attempts.increment().await?, 2);
    assert_eq!(attempts.get().await?, 2);

    attempts.reset().await?;
    assert_eq!(attempts.get().await?, 0);

    Ok(())
}
