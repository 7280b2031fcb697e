use super::*;

/// Tests the player name existence check.
///
/// Expected: Ok(true) for taken names, Ok(false) otherwise
#[tokio::test]
async fn reports_taken_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, player) = factory::helpers::create_user_with_player(db).await?;

    let repo = PlayerRepository::new(db);

    assert!(repo.name_exists(&player.name).await?);
    assert!(!repo.name_exists("Herobrine").await?);

    Ok(())
}
