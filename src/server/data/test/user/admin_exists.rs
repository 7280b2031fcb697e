use super::*;

/// Tests detecting when no administrators exist.
///
/// Verifies the fresh-install case, including when only normal and banned
/// users are present.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    factory::create_user(db).await?;
    factory::user::UserFactory::new(db).permission(-1).build().await?;

    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests that both admin levels count as administrators.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_admin_or_super_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).permission(1).build().await?;

    let repo = UserRepository::new(db);
    assert!(repo.admin_exists().await?);

    let other = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let other_db = other.db.as_ref().unwrap();
    factory::user::UserFactory::new(other_db)
        .permission(2)
        .build()
        .await?;

    assert!(UserRepository::new(other_db).admin_exists().await?);

    Ok(())
}
