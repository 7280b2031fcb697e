use super::*;

/// Tests counting registrations per IP address.
///
/// Verifies that only accounts registered from the requested address are counted.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_only_matching_ip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).ip("10.0.0.1").build().await?;
    factory::user::UserFactory::new(db).ip("10.0.0.1").build().await?;
    factory::user::UserFactory::new(db).ip("10.0.0.2").build().await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.count_by_ip("10.0.0.1").await?, 2);
    assert_eq!(repo.count_by_ip("10.0.0.3").await?, 0);

    Ok(())
}
