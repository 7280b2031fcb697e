use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login request. `identification` is an email address or a player name.
///
/// Fields default to empty so missing values surface as validation errors
/// rather than JSON rejections.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub identification: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub captcha: Option<String>,
    /// Keep the session alive for a week instead of the browser session.
    #[serde(default)]
    pub remember: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct RegisterDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Required unless the site registers with player names.
    #[serde(default)]
    pub nickname: Option<String>,
    /// Required when the site registers with player names.
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub captcha: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct ForgotPasswordDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub captcha: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct ResetPasswordDto {
    #[serde(default)]
    pub password: String,
}

/// Successful login or registration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AuthenticatedDto {
    pub code: i32,
    pub message: String,
    /// Auth token bound to the current password; also stored in the session.
    pub token: String,
}
