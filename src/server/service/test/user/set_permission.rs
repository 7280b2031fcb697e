use super::*;

async fn user_with(
    db: &sea_orm::DatabaseConnection,
    permission: i32,
) -> Result<User, sea_orm::DbErr> {
    let model = factory::user::UserFactory::new(db)
        .permission(permission)
        .build()
        .await?;
    Ok(User::from_entity(model))
}

/// Tests an admin banning a normal user.
///
/// Expected: Ok with the target banned
#[tokio::test]
async fn admin_can_ban_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = user_with(db, 1).await?;
    let member = user_with(db, 0).await?;

    let updated = UserService::new(db)
        .set_permission(
            &admin,
            SetPermissionParam {
                uid: member.uid,
                permission: Permission::Banned,
            },
        )
        .await?;

    assert_eq!(updated.permission, Permission::Banned);
    let stored = UserRepository::new(db).find_by_id(member.uid).await?.unwrap();
    assert_eq!(stored.permission, Permission::Banned);

    Ok(())
}

/// Tests that only a super admin can grant admin.
///
/// Expected: Err(AuthError::AccessDenied) for an admin, Ok for a super admin
#[tokio::test]
async fn only_super_admin_grants_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let root = user_with(db, 2).await?;
    let admin = user_with(db, 1).await?;
    let member = user_with(db, 0).await?;
    let service = UserService::new(db);
    let promote = || SetPermissionParam {
        uid: member.uid,
        permission: Permission::Admin,
    };

    assert!(matches!(
        service.set_permission(&admin, promote()).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let updated = service.set_permission(&root, promote()).await?;
    assert_eq!(updated.permission, Permission::Admin);

    Ok(())
}

/// Tests the level hierarchy.
///
/// Verifies that an actor can neither change themselves nor users at or above
/// their own level.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_self_and_peers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = user_with(db, 1).await?;
    let other_admin = user_with(db, 1).await?;
    let root = user_with(db, 2).await?;
    let service = UserService::new(db);

    for target in [&admin, &other_admin, &root] {
        let result = service
            .set_permission(
                &admin,
                SetPermissionParam {
                    uid: target.uid,
                    permission: Permission::Normal,
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }

    Ok(())
}

/// Tests a target that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let root = user_with(db, 2).await?;

    let result = UserService::new(db)
        .set_permission(
            &root,
            SetPermissionParam {
                uid: root.uid + 100,
                permission: Permission::Banned,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
