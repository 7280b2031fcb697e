use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub uid: i32,
    pub email: String,
    pub nickname: String,
    pub score: i32,
    /// -1 banned, 0 normal, 1 admin, 2 super admin
    pub permission: i32,
    pub register_at: DateTime<Utc>,
    /// Names of the players owned by this user
    pub players: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct ChangePasswordDto {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct SetPermissionDto {
    pub permission: i32,
}
