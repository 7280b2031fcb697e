//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, Permission, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// Both timestamps are set to the current time.
    ///
    /// # Arguments
    /// - `param` - Account fields including the already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            nickname: ActiveValue::Set(param.nickname),
            password: ActiveValue::Set(param.password_hash),
            score: ActiveValue::Set(param.score),
            permission: ActiveValue::Set(param.permission.level()),
            ip: ActiveValue::Set(param.ip),
            last_sign_at: ActiveValue::Set(now),
            register_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, uid: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(uid).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the owner of the player with the given name.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Player exists and its owner was found
    /// - `Ok(None)` - No such player, or the player has no owner row
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_player_name(&self, name: &str) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::Player::find()
            .filter(entity::player::Column::Name.eq(name))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(_, user)| user).map(User::from_entity))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts accounts registered from an IP address.
    pub async fn count_by_ip(&self, ip: &str) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Ip.eq(ip))
            .count(self.db)
            .await
    }

    /// Checks if any admin or super admin exists.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one administrator exists
    /// - `Ok(false)` - Fresh install, no administrators yet
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Permission.gte(Permission::Admin.level()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Replaces the stored password hash.
    pub async fn update_password(&self, uid: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Uid.eq(uid))
            .col_expr(
                entity::user::Column::Password,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets `last_sign_at` to the current time.
    pub async fn update_last_sign_at(&self, uid: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Uid.eq(uid))
            .col_expr(
                entity::user::Column::LastSignAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets the permission level of a user.
    ///
    /// # Returns
    /// - `Ok(())` - Level updated (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_permission(&self, uid: i32, permission: Permission) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Uid.eq(uid))
            .col_expr(
                entity::user::Column::Permission,
                sea_orm::sea_query::Expr::value(permission.level()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
