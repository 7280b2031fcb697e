//! Parameters and outcomes of the authentication flows.

use crate::{
    model::{
        auth::{ForgotPasswordDto, LoginDto, RegisterDto, ResetPasswordDto},
        user::ChangePasswordDto,
    },
    server::model::user::User,
};

#[derive(Debug, Clone)]
pub struct LoginParam {
    /// Email address or player name.
    pub identification: String,
    pub password: String,
    pub captcha: Option<String>,
    pub remember: bool,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            identification: dto.identification.trim().to_string(),
            password: dto.password,
            captcha: dto.captcha,
            remember: dto.remember,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub email: String,
    pub password: String,
    pub nickname: Option<String>,
    pub player_name: Option<String>,
    pub captcha: Option<String>,
    /// Client address the registration is counted against.
    pub ip: String,
}

impl RegisterParam {
    pub fn from_dto(dto: RegisterDto, ip: String) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            password: dto.password,
            nickname: dto.nickname,
            player_name: dto.player_name,
            captcha: dto.captcha,
            ip,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ForgotPasswordParam {
    pub email: String,
    pub captcha: Option<String>,
}

impl ForgotPasswordParam {
    pub fn from_dto(dto: ForgotPasswordDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            captcha: dto.captcha,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResetPasswordParam {
    /// Signed reset token taken from the link path.
    pub token: String,
    pub password: String,
}

impl ResetPasswordParam {
    pub fn from_dto(token: String, dto: ResetPasswordDto) -> Self {
        Self {
            token,
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChangePasswordParam {
    pub current_password: String,
    pub new_password: String,
}

impl ChangePasswordParam {
    pub fn from_dto(dto: ChangePasswordDto) -> Self {
        Self {
            current_password: dto.current_password,
            new_password: dto.new_password,
        }
    }
}

/// A user who just logged in or registered, with the token stored in their session.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: User,
    pub token: String,
}
