use super::*;

/// Tests replacing the password hash.
///
/// Verifies that only the target user's hash changes.
///
/// Expected: Ok with new hash stored
#[tokio::test]
async fn replaces_hash_of_target_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update_password(target.uid, "new-hash".to_string())
        .await?;

    let target = repo.find_by_id(target.uid).await?.unwrap();
    let untouched = repo.find_by_id(other.uid).await?.unwrap();

    assert_eq!(target.password_hash, "new-hash");
    assert_eq!(untouched.password_hash, other.password);

    Ok(())
}

/// Tests that the sign-in timestamp moves forward.
///
/// Expected: Ok with later last_sign_at
#[tokio::test]
async fn update_last_sign_at_moves_forward() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update_last_sign_at(user.uid).await?;

    let updated = repo.find_by_id(user.uid).await?.unwrap();
    assert!(updated.last_sign_at >= user.last_sign_at);

    Ok(())
}
