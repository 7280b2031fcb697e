use super::*;

/// Tests loading from an empty option table.
///
/// Expected: Ok(SiteOptions::default())
#[tokio::test]
async fn returns_defaults_without_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let options = OptionService::new(db).load().await?;

    assert_eq!(options, SiteOptions::default());

    Ok(())
}

/// Tests that stored values override defaults and malformed ones are ignored.
///
/// Expected: Ok with parsed values and the default for the malformed row
#[tokio::test]
async fn parses_stored_values() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::set_option(db, "user_can_register", "0").await?;
    factory::set_option(db, "player_name_rule", "cjk").await?;
    factory::set_option(db, "regs_per_ip", "many").await?;

    let options = OptionService::new(db).load().await?;

    assert!(!options.user_can_register);
    assert_eq!(options.player_name_rule, PlayerNameRule::Cjk);
    assert_eq!(options.regs_per_ip, 3);

    Ok(())
}
