use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Permission, User},
};

/// Authenticates the session's user and enforces permission requirements.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
    app_key: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session, app_key: &'a str) -> Self {
        Self {
            db,
            session,
            app_key,
        }
    }

    /// Resolves the authenticated user and checks the required permission.
    ///
    /// The token stored at login must still equal the token derived from the user's
    /// current password hash; otherwise the session is flushed. Banned users are
    /// always rejected.
    ///
    /// # Arguments
    /// - `permission` - Minimum permission level; `Permission::Normal` for any member
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user meeting the requirement
    /// - `Err(AuthError::UserNotInSession)` - No user in session
    /// - `Err(AuthError::StaleSession)` - User deleted or password changed since login
    /// - `Err(AuthError::AccessDenied)` - Banned or below the required level
    pub async fn require(&self, permission: Permission) -> Result<User, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(uid) = auth_session.get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let user = UserRepository::new(self.db).find_by_id(uid).await?;
        let token = auth_session.get_token().await?;

        let user = match (user, token) {
            (Some(user), Some(token)) if user.auth_token(self.app_key) == token => user,
            _ => {
                auth_session.flush().await?;
                return Err(AuthError::StaleSession(uid).into());
            }
        };

        if user.permission == Permission::Banned {
            return Err(AuthError::AccessDenied(uid, "User is banned".to_string()).into());
        }

        if user.permission < permission {
            return Err(AuthError::AccessDenied(
                uid,
                format!(
                    "User has permission level {} but {} is required",
                    user.permission.level(),
                    permission.level()
                ),
            )
            .into());
        }

        Ok(user)
    }
}
