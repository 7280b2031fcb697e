use super::*;

/// Tests reading the option table.
///
/// Expected: Ok with every stored pair
#[tokio::test]
async fn returns_all_pairs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::set_option(db, "regs_per_ip", "5").await?;
    factory::set_option(db, "auth_captcha", "false").await?;

    let repo = OptionRepository::new(db);
    let mut pairs = repo.get_all().await?;
    pairs.sort();

    assert_eq!(
        pairs,
        vec![
            ("auth_captcha".to_string(), "false".to_string()),
            ("regs_per_ip".to_string(), "5".to_string()),
        ]
    );

    Ok(())
}

/// Tests an empty option table.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OptionRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
