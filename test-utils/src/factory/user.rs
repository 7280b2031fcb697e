//! User factory for creating test user entities.

use argon2::{password_hash::SaltString, Argon2, PasswordHasher};
use chrono::Utc;
use rand::Rng;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Plain-text password every factory user gets unless overridden.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .email("steve@example.com")
///     .password("correct-horse")
///     .permission(-1)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    nickname: String,
    password: String,
    score: i32,
    permission: i32,
    ip: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"`
    /// - nickname: `"User {id}"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - score: `1000`
    /// - permission: `0` (normal)
    /// - ip: `"127.0.0.1"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            nickname: format!("User {}", id),
            password: DEFAULT_PASSWORD.to_string(),
            score: 1000,
            permission: 0,
            ip: "127.0.0.1".to_string(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Sets the plain-text password; it is hashed on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    /// Sets the raw permission level (-1 banned, 0 normal, 1 admin, 2 super admin).
    pub fn permission(mut self, permission: i32) -> Self {
        self.permission = permission;
        self
    }

    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = ip.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert or password hashing failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        let password = hash_password(&self.password)?;

        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            nickname: ActiveValue::Set(self.nickname),
            password: ActiveValue::Set(password),
            score: ActiveValue::Set(self.score),
            permission: ActiveValue::Set(self.permission),
            ip: ActiveValue::Set(self.ip),
            last_sign_at: ActiveValue::Set(now),
            register_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

fn hash_password(password: &str) -> Result<String, DbErr> {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    let salt = SaltString::encode_b64(&bytes).map_err(|e| DbErr::Custom(e.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| DbErr::Custom(e.to_string()))
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
