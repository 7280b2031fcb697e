use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The site's option set as returned to administrators.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SiteOptionsDto {
    pub user_can_register: bool,
    pub regs_per_ip: u32,
    pub user_initial_score: i32,
    pub register_with_player_name: bool,
    /// `official` or `cjk`
    pub player_name_rule: String,
    pub player_name_length_min: u32,
    pub player_name_length_max: u32,
    pub auth_captcha: bool,
}

/// Partial update of the option set; absent fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct UpdateSiteOptionsDto {
    pub user_can_register: Option<bool>,
    pub regs_per_ip: Option<u32>,
    pub user_initial_score: Option<i32>,
    pub register_with_player_name: Option<bool>,
    pub player_name_rule: Option<String>,
    pub player_name_length_min: Option<u32>,
    pub player_name_length_max: Option<u32>,
    pub auth_captcha: Option<bool>,
}
