use super::{reset_links, FailingMailer, RecordingMailer, APP_KEY};
use crate::server::{
    data::{player::PlayerRepository, user::UserRepository},
    error::{auth::AuthError, validation::ValidationError, AppError},
    middleware::session::{AuthSession, CaptchaSession, LoginAttemptSession, MailThrottleSession},
    model::{
        auth::{ForgotPasswordParam, LoginParam, RegisterParam, ResetPasswordParam},
        user::{Permission, User},
    },
    service::auth::{password::PasswordResetService, register::taken_field, AuthService},
};
use test_utils::{builder::TestBuilder, factory, factory::user::DEFAULT_PASSWORD};

mod forgot;

fn login_param(identification: &str, password: &str) -> LoginParam {
    LoginParam {
        identification: identification.to_string(),
        password: password.to_string(),
        captcha: None,
        remember: false,
    }
}

fn register_param(email: &str, ip: &str) -> RegisterParam {
    RegisterParam {
        email: email.to_string(),
        password: "correct-horse".to_string(),
        nickname: Some("Steve".to_string()),
        player_name: None,
        captcha: None,
        ip: ip.to_string(),
    }
}
