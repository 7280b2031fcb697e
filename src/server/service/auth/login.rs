use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, CaptchaSession, LoginAttemptSession},
    model::{
        auth::{Authenticated, LoginParam},
        user::Permission,
    },
    service::auth::{AuthService, CAPTCHA_AFTER_FAILS},
    util::{password, validate},
};

impl<'a> AuthService<'a> {
    /// Logs a user in by email address or player name.
    ///
    /// After [`CAPTCHA_AFTER_FAILS`] consecutive failures in this session every further
    /// attempt must carry the answer to the current CAPTCHA.
    ///
    /// # Arguments
    /// - `param` - Identification, password, optional CAPTCHA answer and remember flag
    ///
    /// # Returns
    /// - `Ok(Authenticated)` - Session established, token issued
    /// - `Err(AppError::ValidationErr)` - Missing fields, bad password length or wrong CAPTCHA
    /// - `Err(AuthError::UserNotFound)` - No user for the identification
    /// - `Err(AuthError::Banned)` - The account is banned
    /// - `Err(AuthError::WrongPassword)` - Password mismatch, with the new failure count
    pub async fn login(&self, param: LoginParam) -> Result<Authenticated, AppError> {
        validate::required("identification", &param.identification)?;
        validate::length(
            "password",
            &param.password,
            validate::LOGIN_PASSWORD_MIN,
            validate::PASSWORD_MAX,
        )?;

        let attempts = LoginAttemptSession::new(self.session);
        if attempts.get().await? > CAPTCHA_AFTER_FAILS {
            CaptchaSession::new(self.session)
                .verify(param.captcha.as_deref())
                .await?;
        }

        let user_repo = UserRepository::new(self.db);
        let user = if validate::is_email(&param.identification) {
            user_repo
                .find_by_email(&validate::normalize_email(&param.identification))
                .await?
        } else {
            user_repo.find_by_player_name(&param.identification).await?
        };

        let Some(user) = user else {
            return Err(AuthError::UserNotFound.into());
        };

        if user.permission == Permission::Banned {
            return Err(AuthError::Banned(user.uid).into());
        }

        if !password::verify(&param.password, &user.password_hash) {
            let login_fails = attempts.increment().await?;
            tracing::debug!(uid = user.uid, login_fails, "Incorrect password");
            return Err(AuthError::WrongPassword { login_fails }.into());
        }

        attempts.reset().await?;

        self.establish(user, param.remember).await
    }

    /// Ends the current session.
    ///
    /// # Returns
    /// - `Ok(())` - Session flushed
    /// - `Err(AuthError::NotLoggedIn)` - The session holds no user
    pub async fn logout(&self) -> Result<(), AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(uid) = auth_session.get_user_id().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        auth_session.flush().await?;

        tracing::info!(uid, "User signed out");

        Ok(())
    }
}
