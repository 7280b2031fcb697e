use super::*;

/// Tests resolving a player name to the owning user.
///
/// Expected: Ok(Some(owner))
#[tokio::test]
async fn finds_owner_of_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::player::PlayerFactory::new(db, owner.uid)
        .name("Notch")
        .build()
        .await?;
    // Another user with their own player must not be matched
    factory::helpers::create_user_with_player(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_player_name("Notch").await?;

    assert_eq!(user.map(|u| u.uid), Some(owner.uid));

    Ok(())
}

/// Tests that an unknown player name yields nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_user_with_player(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_player_name("Herobrine").await?.is_none());

    Ok(())
}
