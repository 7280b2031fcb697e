//! Account self-service and administration of other users.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{
        auth::ChangePasswordParam,
        user::{Permission, SetPermissionParam, User},
    },
    util::{password, validate},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Changes the password of the signed-in user and ends their session.
    ///
    /// # Arguments
    /// - `user` - Authenticated user
    /// - `session` - Session to flush once the password is stored
    /// - `param` - Current and new password
    ///
    /// # Returns
    /// - `Ok(())` - Password changed, session flushed
    /// - `Err(AppError::ValidationErr)` - New password out of bounds
    /// - `Err(AuthError::WrongCurrentPassword)` - Current password mismatch
    pub async fn change_password(
        &self,
        user: &User,
        session: &Session,
        param: ChangePasswordParam,
    ) -> Result<(), AppError> {
        validate::password(&param.new_password)?;

        if !password::verify(&param.current_password, &user.password_hash) {
            return Err(AuthError::WrongCurrentPassword.into());
        }

        let password_hash = password::hash(&param.new_password)?;
        UserRepository::new(self.db)
            .update_password(user.uid, password_hash)
            .await?;

        AuthSession::new(session).flush().await?;

        tracing::info!(uid = user.uid, "Password changed");

        Ok(())
    }

    /// Changes another user's permission level.
    ///
    /// An actor can never change their own level or touch a user at or above their
    /// own level, and only a super admin may grant admin.
    ///
    /// # Arguments
    /// - `actor` - Authenticated administrator performing the change
    /// - `param` - Target user and new level (banned, normal or admin)
    ///
    /// # Returns
    /// - `Ok(User)` - Target user with the new level
    /// - `Err(AppError::NotFound)` - Target user does not exist
    /// - `Err(AuthError::AccessDenied)` - Change not allowed for this actor
    pub async fn set_permission(
        &self,
        actor: &User,
        param: SetPermissionParam,
    ) -> Result<User, AppError> {
        if actor.uid == param.uid {
            return Err(AuthError::AccessDenied(
                actor.uid,
                "User attempted to change their own permission".to_string(),
            )
            .into());
        }

        let user_repo = UserRepository::new(self.db);

        let Some(mut target) = user_repo.find_by_id(param.uid).await? else {
            return Err(AppError::NotFound("No such user.".to_string()));
        };

        if target.permission >= actor.permission {
            return Err(AuthError::AccessDenied(
                actor.uid,
                format!(
                    "User attempted to change permission of user {} at or above their level",
                    target.uid
                ),
            )
            .into());
        }

        if param.permission.is_admin() && actor.permission != Permission::SuperAdmin {
            return Err(AuthError::AccessDenied(
                actor.uid,
                "Only super admins can grant admin".to_string(),
            )
            .into());
        }

        user_repo.set_permission(target.uid, param.permission).await?;
        target.permission = param.permission;

        tracing::info!(
            actor = actor.uid,
            uid = target.uid,
            permission = param.permission.level(),
            "Permission changed"
        );

        Ok(target)
    }
}
