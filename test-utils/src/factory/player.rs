//! Player factory for creating test player entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating players owned by an existing user.
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    uid: i32,
    name: String,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory.
    ///
    /// Defaults:
    /// - name: `"player_{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `uid` - Owner's user ID
    pub fn new(db: &'a DatabaseConnection, uid: i32) -> Self {
        Self {
            db,
            uid,
            name: format!("player_{}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the player entity into the database.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            uid: ActiveValue::Set(self.uid),
            name: ActiveValue::Set(self.name),
            last_modified: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with a default name for the given owner.
pub async fn create_player(
    db: &DatabaseConnection,
    uid: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, uid).build().await
}
