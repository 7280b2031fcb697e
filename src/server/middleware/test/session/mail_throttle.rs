use super::*;

/// Tests recording the last mail time.
///
/// Expected: None before, the recorded timestamp after
#[tokio::test]
async fn records_last_sent_at() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let throttle = MailThrottleSession::new(session);
    assert_eq!(throttle.last_sent_at().await?, None);

    throttle.record(1_700_000_000).await?;
    assert_eq!(throttle.last_sent_at().await?, Some(1_700_000_000));

    Ok(())
}
