use super::*;

/// Tests changing the password with the right current password.
///
/// Verifies that the new hash is stored and the session is flushed.
///
/// Expected: Ok(()) and an empty session
#[tokio::test]
async fn changes_password_and_ends_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    AuthSession::new(session)
        .login(user.uid, &user.auth_token(APP_KEY), false)
        .await?;

    UserService::new(db)
        .change_password(
            &user,
            session,
            ChangePasswordParam {
                current_password: DEFAULT_PASSWORD.to_string(),
                new_password: "brand-new-pass".to_string(),
            },
        )
        .await?;

    let stored = UserRepository::new(db).find_by_id(user.uid).await?.unwrap();
    assert!(password::verify("brand-new-pass", &stored.password_hash));
    assert_ne!(stored.auth_token(APP_KEY), user.auth_token(APP_KEY));
    assert_eq!(AuthSession::new(session).get_user_id().await?, None);

    Ok(())
}

/// Tests a wrong current password.
///
/// Expected: Err(AuthError::WrongCurrentPassword)
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = User::from_entity(factory::create_user(db).await?);

    let result = UserService::new(db)
        .change_password(
            &user,
            session,
            ChangePasswordParam {
                current_password: "not-my-password".to_string(),
                new_password: "brand-new-pass".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::WrongCurrentPassword))
    ));

    Ok(())
}

/// Tests the new password bounds.
///
/// Expected: Err(ValidationError::Length)
#[tokio::test]
async fn validates_new_password() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = User::from_entity(factory::create_user(db).await?);

    let result = UserService::new(db)
        .change_password(
            &user,
            session,
            ChangePasswordParam {
                current_password: DEFAULT_PASSWORD.to_string(),
                new_password: "x".repeat(33),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::Length { .. }))
    ));

    Ok(())
}
