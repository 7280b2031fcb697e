//! Field validation rules shared by the authentication flows.
//!
//! Lengths are measured in characters, not bytes.

use crate::server::{error::validation::ValidationError, model::option::PlayerNameRule};

/// Password bounds for registration, reset and password changes.
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 32;

/// Looser lower bound accepted at login so older accounts can still sign in.
pub const LOGIN_PASSWORD_MIN: usize = 6;

pub const NICKNAME_MAX: usize = 255;

const SPECIAL_CHARS: [char; 6] = ['<', '>', '&', '"', '\'', '\\'];

/// Returns the value when it is not blank.
pub fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(value)
}

pub fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    required(field, value)?;
    if !is_email(value) {
        return Err(ValidationError::InvalidEmail(field));
    }
    Ok(())
}

pub fn length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    required(field, value)?;
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::Length { field, min, max });
    }
    Ok(())
}

pub fn password(value: &str) -> Result<(), ValidationError> {
    length("password", value, PASSWORD_MIN, PASSWORD_MAX)
}

/// Nicknames are shown in HTML, so markup characters and padding are rejected.
pub fn nickname(value: &str) -> Result<(), ValidationError> {
    required("nickname", value)?;
    if value.trim() != value || value.contains(&SPECIAL_CHARS[..]) {
        return Err(ValidationError::SpecialChars("nickname"));
    }
    if value.chars().count() > NICKNAME_MAX {
        return Err(ValidationError::TooLong("nickname", NICKNAME_MAX));
    }
    Ok(())
}

pub fn player_name(
    value: &str,
    rule: PlayerNameRule,
    min: u32,
    max: u32,
) -> Result<(), ValidationError> {
    length("player_name", value, min as usize, max as usize)?;
    if !value.chars().all(|c| rule.allows(c)) {
        return Err(ValidationError::Format("player_name"));
    }
    Ok(())
}

/// Pragmatic address check: `local@domain.tld`, no whitespace, DNS-shaped domain.
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || local.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    });
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic));

    labels_ok && tld_ok
}

/// Canonical form an email address is stored and looked up in.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}
