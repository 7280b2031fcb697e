use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("alex@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("alex@example.com").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().uid, created.uid);

    Ok(())
}

/// Tests that an unknown email yields nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}

/// Tests the existence check used by registration.
///
/// Expected: Ok(true)
#[tokio::test]
async fn email_exists_for_registered_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_exists(&user.email).await?);

    Ok(())
}
