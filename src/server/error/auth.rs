use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Authentication, registration and password reset failures.
///
/// Every variant maps to a numeric response code and a human readable message. Flow
/// failures answer with 200 and a non-zero code; only session and permission problems
/// use 401/403.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user matches the given email or player name.
    #[error("No such user.")]
    UserNotFound,

    /// Password did not match; carries the failure count after this attempt.
    #[error("Incorrect password.")]
    WrongPassword {
        /// Consecutive failures recorded in the session
        login_fails: u32,
    },

    /// Current password given to a password change did not match.
    #[error("Incorrect current password.")]
    WrongCurrentPassword,

    /// The account is banned.
    #[error("You have been banned.")]
    Banned(i32),

    /// Registration is administratively closed.
    #[error("Registration is closed.")]
    RegistrationClosed,

    /// The client IP reached its registration quota.
    #[error("You can only register {0} accounts from one IP address.")]
    RegistrationQuotaReached(u32),

    /// Logout requested without an authenticated session.
    #[error("No valid session.")]
    NotLoggedIn,

    /// Mail transport is not configured so reset mails cannot be sent.
    #[error("Password reset is disabled.")]
    MailDisabled,

    /// A reset mail was sent from this session too recently.
    #[error("Mails are sent too frequently.")]
    MailTooFrequent,

    /// No account uses the requested email.
    #[error("This email is not registered.")]
    Unregistered,

    /// The mail transport failed to deliver the reset mail.
    #[error("Failed to send mail: {0}")]
    MailFailed(String),

    /// Reset link signature invalid, expired, or already used.
    #[error("Invalid or expired link.")]
    InvalidResetLink,

    /// Request requires an authenticated session but none exists.
    #[error("Not logged in.")]
    UserNotInSession,

    /// Session references a user that no longer exists or whose token is stale.
    #[error("Session for user {0} is no longer valid")]
    StaleSession(i32),

    /// User lacks the permission required for an operation.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

impl AuthError {
    /// Numeric response code reported in the body.
    pub fn code(&self) -> i32 {
        match self {
            Self::UserNotFound | Self::MailFailed(_) => 2,
            Self::Banned(_) => 5,
            Self::RegistrationClosed | Self::RegistrationQuotaReached(_) => 7,
            _ => 1,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::UserNotInSession | Self::StaleSession(_) => StatusCode::UNAUTHORIZED,
            Self::AccessDenied(_, _) | Self::InvalidResetLink => StatusCode::FORBIDDEN,
            _ => StatusCode::OK,
        }
    }
}

/// Converts authentication errors into `{ code, message }` responses.
///
/// Session and permission failures are logged at debug level with their details while
/// the client only receives a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let body = match self {
            Self::WrongPassword { login_fails } => ErrorDto {
                code,
                message: self.to_string(),
                login_fails: Some(login_fails),
            },
            Self::StaleSession(_) => {
                tracing::debug!("{}", self);
                ErrorDto::new(code, AuthError::UserNotInSession.to_string())
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                ErrorDto::new(code, "Access denied.".to_string())
            }
            Self::MailFailed(ref reason) => {
                tracing::error!("Failed to send password reset mail: {}", reason);
                ErrorDto::new(code, self.to_string())
            }
            err => ErrorDto::new(code, err.to_string()),
        };

        (status, Json(body)).into_response()
    }
}
