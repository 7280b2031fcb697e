use super::*;

/// Tests a partial update.
///
/// Verifies that given fields are persisted and the others keep their values.
///
/// Expected: Ok with the updated set, visible on the next load
#[tokio::test]
async fn persists_given_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OptionService::new(db);
    let updated = service
        .update(UpdateSiteOptionsDto {
            regs_per_ip: Some(10),
            auth_captcha: Some(false),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.regs_per_ip, 10);
    assert!(!updated.auth_captcha);
    assert!(updated.user_can_register);

    assert_eq!(service.load().await?, updated);

    Ok(())
}

/// Tests that inconsistent bounds are rejected without writing anything.
///
/// Expected: Err(ValidationError::Format) and unchanged options
#[tokio::test]
async fn rejects_inverted_length_bounds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OptionService::new(db);
    let result = service
        .update(UpdateSiteOptionsDto {
            regs_per_ip: Some(10),
            player_name_length_min: Some(20),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Format(_)))
    ));
    assert_eq!(service.load().await?, SiteOptions::default());

    Ok(())
}

/// Tests an unknown player name rule.
///
/// Expected: Err(ValidationError::Format("player_name_rule"))
#[tokio::test]
async fn rejects_unknown_name_rule() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OptionService::new(db)
        .update(UpdateSiteOptionsDto {
            player_name_rule: Some("emoji".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Format(
            "player_name_rule"
        )))
    ));

    Ok(())
}
