//! Authentication flows backed by the session: login, registration, logout and
//! password reset.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    middleware::session::AuthSession,
    model::{auth::Authenticated, user::User},
};

pub mod login;
pub mod password;
pub mod register;
pub mod reset_link;

/// Consecutive failed logins after which a CAPTCHA answer is required.
pub const CAPTCHA_AFTER_FAILS: u32 = 3;

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub session: &'a Session,
    pub app_key: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session, app_key: &'a str) -> Self {
        Self {
            db,
            session,
            app_key,
        }
    }

    /// Binds the session to the user and records the sign-in time.
    async fn establish(&self, user: User, remember: bool) -> Result<Authenticated, AppError> {
        let token = user.auth_token(self.app_key);

        AuthSession::new(self.session)
            .login(user.uid, &token, remember)
            .await?;
        UserRepository::new(self.db)
            .update_last_sign_at(user.uid)
            .await?;

        tracing::info!(uid = user.uid, "User signed in");

        Ok(Authenticated { user, token })
    }
}
