//! Typed view over the option store.
//!
//! The `options` table is a plain key/value set. `SiteOptions` parses the rows the
//! application cares about, falling back to defaults for missing or malformed values.

use crate::model::option::{SiteOptionsDto, UpdateSiteOptionsDto};
use crate::server::error::validation::ValidationError;

pub const USER_CAN_REGISTER: &str = "user_can_register";
pub const REGS_PER_IP: &str = "regs_per_ip";
pub const USER_INITIAL_SCORE: &str = "user_initial_score";
pub const REGISTER_WITH_PLAYER_NAME: &str = "register_with_player_name";
pub const PLAYER_NAME_RULE: &str = "player_name_rule";
pub const PLAYER_NAME_LENGTH_MIN: &str = "player_name_length_min";
pub const PLAYER_NAME_LENGTH_MAX: &str = "player_name_length_max";
pub const AUTH_CAPTCHA: &str = "auth_captcha";

/// Character set accepted in player names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerNameRule {
    /// ASCII letters, digits and underscore.
    Official,
    /// `Official` plus CJK unified ideographs.
    Cjk,
}

impl PlayerNameRule {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Cjk => "cjk",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "official" => Some(Self::Official),
            "cjk" => Some(Self::Cjk),
            _ => None,
        }
    }

    /// Whether `c` may appear in a player name under this rule.
    pub fn allows(self, c: char) -> bool {
        let official = c.is_ascii_alphanumeric() || c == '_';
        match self {
            Self::Official => official,
            Self::Cjk => official || ('\u{4e00}'..='\u{9fa5}').contains(&c),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteOptions {
    pub user_can_register: bool,
    pub regs_per_ip: u32,
    pub user_initial_score: i32,
    pub register_with_player_name: bool,
    pub player_name_rule: PlayerNameRule,
    pub player_name_length_min: u32,
    pub player_name_length_max: u32,
    pub auth_captcha: bool,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            user_can_register: true,
            regs_per_ip: 3,
            user_initial_score: 1000,
            register_with_player_name: false,
            player_name_rule: PlayerNameRule::Official,
            player_name_length_min: 3,
            player_name_length_max: 16,
            auth_captcha: true,
        }
    }
}

impl SiteOptions {
    /// Builds the option set from stored `(name, value)` rows.
    ///
    /// Unknown names are ignored; values that fail to parse keep their default.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut options = Self::default();

        for (name, value) in pairs {
            let value = value.trim();
            match name.as_str() {
                USER_CAN_REGISTER => parse_into(value, parse_bool, &mut options.user_can_register),
                REGS_PER_IP => parse_into(value, |v| v.parse().ok(), &mut options.regs_per_ip),
                USER_INITIAL_SCORE => {
                    parse_into(value, |v| v.parse().ok(), &mut options.user_initial_score)
                }
                REGISTER_WITH_PLAYER_NAME => {
                    parse_into(value, parse_bool, &mut options.register_with_player_name)
                }
                PLAYER_NAME_RULE => {
                    parse_into(value, PlayerNameRule::parse, &mut options.player_name_rule)
                }
                PLAYER_NAME_LENGTH_MIN => {
                    parse_into(value, |v| v.parse().ok(), &mut options.player_name_length_min)
                }
                PLAYER_NAME_LENGTH_MAX => {
                    parse_into(value, |v| v.parse().ok(), &mut options.player_name_length_max)
                }
                AUTH_CAPTCHA => parse_into(value, parse_bool, &mut options.auth_captcha),
                _ => {}
            }
        }

        options
    }

    /// Applies a partial update and returns the rows that must be written.
    ///
    /// # Returns
    /// - `Ok(Vec<(name, value)>)` - Rows for every field present in the update
    /// - `Err(ValidationError)` - Unknown name rule or inconsistent length bounds
    pub fn apply(
        &mut self,
        update: UpdateSiteOptionsDto,
    ) -> Result<Vec<(&'static str, String)>, ValidationError> {
        let mut rows = Vec::new();

        if let Some(v) = update.user_can_register {
            self.user_can_register = v;
            rows.push((USER_CAN_REGISTER, v.to_string()));
        }
        if let Some(v) = update.regs_per_ip {
            self.regs_per_ip = v;
            rows.push((REGS_PER_IP, v.to_string()));
        }
        if let Some(v) = update.user_initial_score {
            self.user_initial_score = v;
            rows.push((USER_INITIAL_SCORE, v.to_string()));
        }
        if let Some(v) = update.register_with_player_name {
            self.register_with_player_name = v;
            rows.push((REGISTER_WITH_PLAYER_NAME, v.to_string()));
        }
        if let Some(v) = update.player_name_rule {
            let rule =
                PlayerNameRule::parse(&v).ok_or(ValidationError::Format(PLAYER_NAME_RULE))?;
            self.player_name_rule = rule;
            rows.push((PLAYER_NAME_RULE, rule.as_str().to_string()));
        }
        if let Some(v) = update.player_name_length_min {
            self.player_name_length_min = v;
            rows.push((PLAYER_NAME_LENGTH_MIN, v.to_string()));
        }
        if let Some(v) = update.player_name_length_max {
            self.player_name_length_max = v;
            rows.push((PLAYER_NAME_LENGTH_MAX, v.to_string()));
        }
        if let Some(v) = update.auth_captcha {
            self.auth_captcha = v;
            rows.push((AUTH_CAPTCHA, v.to_string()));
        }

        if self.player_name_length_min == 0
            || self.player_name_length_min > self.player_name_length_max
        {
            return Err(ValidationError::Format(PLAYER_NAME_LENGTH_MIN));
        }

        Ok(rows)
    }

    pub fn into_dto(self) -> SiteOptionsDto {
        SiteOptionsDto {
            user_can_register: self.user_can_register,
            regs_per_ip: self.regs_per_ip,
            user_initial_score: self.user_initial_score,
            register_with_player_name: self.register_with_player_name,
            player_name_rule: self.player_name_rule.as_str().to_string(),
            player_name_length_min: self.player_name_length_min,
            player_name_length_max: self.player_name_length_max,
            auth_captcha: self.auth_captcha,
        }
    }
}

fn parse_into<T>(value: &str, parse: impl Fn(&str) -> Option<T>, target: &mut T) {
    if let Some(parsed) = parse(value) {
        *target = parsed;
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
