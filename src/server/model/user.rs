//! User domain models and parameters.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::{
    model::user::{SetPermissionDto, UserDto},
    server::{error::validation::ValidationError, model::player::Player},
};

/// Permission level of an account.
///
/// Variants are declared in ascending order so levels compare with `<`/`>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Permission {
    Banned,
    Normal,
    Admin,
    SuperAdmin,
}

impl Permission {
    /// Maps a stored level to a permission; out-of-range values clamp to the nearest level.
    pub fn from_level(level: i32) -> Self {
        match level {
            i32::MIN..=-1 => Self::Banned,
            0 => Self::Normal,
            1 => Self::Admin,
            _ => Self::SuperAdmin,
        }
    }

    pub fn level(self) -> i32 {
        match self {
            Self::Banned => -1,
            Self::Normal => 0,
            Self::Admin => 1,
            Self::SuperAdmin => 2,
        }
    }

    pub fn is_admin(self) -> bool {
        self >= Self::Admin
    }
}

/// Registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub uid: i32,
    pub email: String,
    pub nickname: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub score: i32,
    pub permission: Permission,
    /// Address the account was registered from.
    pub ip: String,
    pub last_sign_at: DateTime<Utc>,
    pub register_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            uid: entity.uid,
            email: entity.email,
            nickname: entity.nickname,
            password_hash: entity.password,
            score: entity.score,
            permission: Permission::from_level(entity.permission),
            ip: entity.ip,
            last_sign_at: entity.last_sign_at,
            register_at: entity.register_at,
        }
    }

    pub fn into_dto(self, players: Vec<Player>) -> UserDto {
        UserDto {
            uid: self.uid,
            email: self.email,
            nickname: self.nickname,
            score: self.score,
            permission: self.permission.level(),
            register_at: self.register_at,
            players: players.into_iter().map(|player| player.name).collect(),
        }
    }

    /// Derives the auth token bound to the user's current password hash.
    ///
    /// The token is never stored; sessions keep the value issued at login and the
    /// guard recomputes it per request, so a password change invalidates every session.
    ///
    /// # Arguments
    /// - `app_key` - Application secret mixed into the digest
    ///
    /// # Returns
    /// - `String` - 64 character lowercase hex SHA-256 digest
    pub fn auth_token(&self, app_key: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.uid.to_be_bytes());
        hasher.update(self.email.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.password_hash.as_bytes());
        hasher.update([0u8]);
        hasher.update(app_key.as_bytes());

        format!("{:x}", hasher.finalize())
    }
}

/// Parameters for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub nickname: String,
    pub password_hash: String,
    pub score: i32,
    pub permission: Permission,
    pub ip: String,
}

/// Parameters for changing another user's permission level.
#[derive(Debug, Clone)]
pub struct SetPermissionParam {
    pub uid: i32,
    pub permission: Permission,
}

impl SetPermissionParam {
    /// Accepts banned (-1), normal (0) and admin (1); super admin cannot be granted.
    pub fn from_dto(uid: i32, dto: SetPermissionDto) -> Result<Self, ValidationError> {
        let permission = match dto.permission {
            -1 => Permission::Banned,
            0 => Permission::Normal,
            1 => Permission::Admin,
            _ => return Err(ValidationError::Format("permission")),
        };

        Ok(Self { uid, permission })
    }
}
