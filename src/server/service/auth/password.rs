use chrono::Utc;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::{CaptchaSession, MailThrottleSession},
    model::auth::{ForgotPasswordParam, ResetPasswordParam},
    service::{
        auth::reset_link::ResetLinkSigner,
        mail::{MailTransport, OutgoingMail},
        option::OptionService,
    },
    util::{password, validate},
};

/// Minimum delay between two reset mails from the same session.
pub const MAIL_RESEND_INTERVAL_SECONDS: i64 = 60;

const RESET_MAIL_SUBJECT: &str = "Reset your password";

/// Forgot/reset password flow.
pub struct PasswordResetService<'a> {
    db: &'a DatabaseConnection,
    mailer: Option<&'a dyn MailTransport>,
    links: &'a ResetLinkSigner,
}

impl<'a> PasswordResetService<'a> {
    /// Creates the service. A `None` mailer disables the forgot password flow.
    pub fn new(
        db: &'a DatabaseConnection,
        mailer: Option<&'a dyn MailTransport>,
        links: &'a ResetLinkSigner,
    ) -> Self {
        Self { db, mailer, links }
    }

    /// Mails a reset link to a registered address.
    ///
    /// # Arguments
    /// - `session` - Session holding the CAPTCHA phrase and the resend throttle
    /// - `param` - Email address and CAPTCHA answer
    ///
    /// # Returns
    /// - `Ok(())` - Mail handed to the transport
    /// - `Err(AuthError::MailDisabled)` - No mail transport configured
    /// - `Err(AppError::ValidationErr)` - Invalid email or wrong CAPTCHA
    /// - `Err(AuthError::MailTooFrequent)` - Previous mail sent less than a minute ago
    /// - `Err(AuthError::Unregistered)` - No account uses the address
    /// - `Err(AuthError::MailFailed)` - The transport failed
    pub async fn forgot(
        &self,
        session: &Session,
        param: ForgotPasswordParam,
    ) -> Result<(), AppError> {
        let Some(mailer) = self.mailer else {
            return Err(AuthError::MailDisabled.into());
        };

        let email = validate::normalize_email(&param.email);
        validate::email("email", &email)?;

        let options = OptionService::new(self.db).load().await?;
        if options.auth_captcha {
            CaptchaSession::new(session)
                .verify(param.captcha.as_deref())
                .await?;
        }

        let throttle = MailThrottleSession::new(session);
        let now = Utc::now().timestamp();
        if let Some(last_sent_at) = throttle.last_sent_at().await? {
            if now - last_sent_at < MAIL_RESEND_INTERVAL_SECONDS {
                return Err(AuthError::MailTooFrequent.into());
            }
        }

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
        else {
            return Err(AuthError::Unregistered.into());
        };

        let link = self.links.link(&user)?;

        mailer
            .send(OutgoingMail {
                to: user.email.clone(),
                subject: RESET_MAIL_SUBJECT.to_string(),
                body: reset_mail_body(&user.nickname, &link),
            })
            .await
            .map_err(|e| AuthError::MailFailed(e.to_string()))?;

        throttle.record(now).await?;

        tracing::info!(uid = user.uid, "Password reset mail sent");

        Ok(())
    }

    /// Sets a new password through a reset link.
    ///
    /// Storing the new hash changes both the user's auth token, which ends existing
    /// sessions, and the fingerprint the link was signed with, which makes the link
    /// single use.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AuthError::InvalidResetLink)` - Bad signature, expired, unknown user or used link
    /// - `Err(AppError::ValidationErr)` - New password out of bounds
    pub async fn reset(&self, param: ResetPasswordParam) -> Result<(), AppError> {
        let claims = self.links.verify(&param.token)?;

        let user_repo = UserRepository::new(self.db);
        let user = match user_repo.find_by_id(claims.uid).await? {
            Some(user) if ResetLinkSigner::matches(&claims, &user) => user,
            _ => return Err(AuthError::InvalidResetLink.into()),
        };

        validate::password(&param.password)?;

        let password_hash = password::hash(&param.password)?;
        user_repo.update_password(user.uid, password_hash).await?;

        tracing::info!(uid = user.uid, "Password reset");

        Ok(())
    }
}

fn reset_mail_body(nickname: &str, link: &str) -> String {
    format!(
        "Hello {},\n\n\
         Someone requested a password reset for your account. Open the link below \
         within one hour to choose a new password:\n\n\
         {}\n\n\
         If you did not request this, you can ignore this mail.\n",
        nickname, link
    )
}
