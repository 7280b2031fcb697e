//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern:
//! - `AuthSession` - Authenticated user ID and the auth token issued at login
//! - `LoginAttemptSession` - Consecutive failed login counter
//! - `CaptchaSession` - Expected answer of the last CAPTCHA image
//! - `MailThrottleSession` - Time of the last password reset mail

use time::Duration;
use tower_sessions::{Expiry, Session};

use crate::server::error::{validation::ValidationError, AppError};

const SESSION_AUTH_UID: &str = "auth:uid";
const SESSION_AUTH_TOKEN: &str = "auth:token";
const SESSION_LOGIN_FAILS: &str = "auth:login_fails";
const SESSION_CAPTCHA_PHRASE: &str = "captcha:phrase";
const SESSION_MAIL_LAST_SENT_AT: &str = "mail:last_sent_at";

/// Lifetime of a remembered session after the last request.
pub const REMEMBER_ME_DAYS: i64 = 7;

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Establishes a logged-in session.
    ///
    /// Cycles the session ID to prevent fixation, stores the user ID with the auth
    /// token and sets the expiry. Remembered sessions survive browser restarts for
    /// [`REMEMBER_ME_DAYS`] of inactivity, others end with the browser session.
    ///
    /// # Arguments
    /// - `uid` - Authenticated user's ID
    /// - `token` - Auth token derived from the user's current password hash
    /// - `remember` - Whether the session should outlive the browser session
    ///
    /// # Returns
    /// - `Ok(())` - Session established
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session store
    pub async fn login(&self, uid: i32, token: &str, remember: bool) -> Result<(), AppError> {
        self.session.cycle_id().await?;

        let expiry = if remember {
            Expiry::OnInactivity(Duration::days(REMEMBER_ME_DAYS))
        } else {
            Expiry::OnSessionEnd
        };
        self.session.set_expiry(Some(expiry));

        self.session.insert(SESSION_AUTH_UID, uid).await?;
        self.session.insert(SESSION_AUTH_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves the authenticated user's ID.
    ///
    /// # Returns
    /// - `Ok(Some(uid))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_UID).await?)
    }

    pub async fn get_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_TOKEN).await?)
    }

    /// Deletes the session from the store and drops every value it held.
    pub async fn flush(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// Consecutive failed login attempts.
///
/// The counter lives in the session, so it resets when the client discards its cookie;
/// it only gates the CAPTCHA requirement and is not a lockout.
pub struct LoginAttemptSession<'a> {
    session: &'a Session,
}

impl<'a> LoginAttemptSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn get(&self) -> Result<u32, AppError> {
        Ok(self
            .session
            .get::<u32>(SESSION_LOGIN_FAILS)
            .await?
            .unwrap_or(0))
    }

    /// Records a failure and returns the new count.
    pub async fn increment(&self) -> Result<u32, AppError> {
        let fails = self.get().await?.saturating_add(1);
        self.session.insert(SESSION_LOGIN_FAILS, fails).await?;
        Ok(fails)
    }

    pub async fn reset(&self) -> Result<(), AppError> {
        self.session.remove::<u32>(SESSION_LOGIN_FAILS).await?;
        Ok(())
    }
}

/// Expected CAPTCHA answer.
pub struct CaptchaSession<'a> {
    session: &'a Session,
}

impl<'a> CaptchaSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the phrase of a freshly generated image, replacing any previous one.
    pub async fn set_phrase(&self, phrase: &str) -> Result<(), AppError> {
        self.session.insert(SESSION_CAPTCHA_PHRASE, phrase).await?;
        Ok(())
    }

    /// Checks an answer against the stored phrase, ignoring case and surrounding
    /// whitespace.
    ///
    /// The phrase is removed whatever the outcome, so every image can be answered once.
    ///
    /// # Returns
    /// - `Ok(())` - Answer matches
    /// - `Err(AppError::ValidationErr(ValidationError::Captcha))` - Missing answer,
    ///   no phrase in session, or mismatch
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn verify(&self, answer: Option<&str>) -> Result<(), AppError> {
        let expected = self
            .session
            .remove::<String>(SESSION_CAPTCHA_PHRASE)
            .await?;

        match (expected, answer.map(str::trim)) {
            (Some(expected), Some(answer))
                if !answer.is_empty() && expected.eq_ignore_ascii_case(answer) =>
            {
                Ok(())
            }
            _ => Err(ValidationError::Captcha.into()),
        }
    }
}

/// Resend throttle for password reset mails.
pub struct MailThrottleSession<'a> {
    session: &'a Session,
}

impl<'a> MailThrottleSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Unix timestamp of the last mail sent from this session.
    pub async fn last_sent_at(&self) -> Result<Option<i64>, AppError> {
        Ok(self.session.get::<i64>(SESSION_MAIL_LAST_SENT_AT).await?)
    }

    pub async fn record(&self, sent_at: i64) -> Result<(), AppError> {
        self.session
            .insert(SESSION_MAIL_LAST_SENT_AT, sent_at)
            .await?;
        Ok(())
    }
}
