//! Player data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::player::{CreatePlayerParam, Player};

pub struct PlayerRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a player for an existing user.
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player
    /// - `Err(DbErr)` - Database error, including unique violations on name
    pub async fn create(&self, param: CreatePlayerParam) -> Result<Player, DbErr> {
        let entity = entity::player::ActiveModel {
            uid: ActiveValue::Set(param.uid),
            name: ActiveValue::Set(param.name),
            last_modified: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Player::from_entity(entity))
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Player::find()
            .filter(entity::player::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every player owned by a user, ordered by name.
    pub async fn get_by_owner(&self, uid: i32) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::Uid.eq(uid))
            .order_by_asc(entity::player::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }
}
