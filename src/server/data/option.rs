//! Option store repository.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
};

/// Key/value access to the `options` table.
pub struct OptionRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every stored `(name, value)` pair.
    pub async fn get_all(&self) -> Result<Vec<(String, String)>, DbErr> {
        let entities = entity::prelude::SiteOption::find().all(self.db).await?;

        Ok(entities
            .into_iter()
            .map(|o| (o.option_name, o.option_value))
            .collect())
    }

    /// Inserts or overwrites an option value.
    pub async fn set(&self, name: &str, value: String) -> Result<(), DbErr> {
        entity::prelude::SiteOption::insert(entity::option::ActiveModel {
            option_name: ActiveValue::Set(name.to_string()),
            option_value: ActiveValue::Set(value),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::option::Column::OptionName)
                .update_column(entity::option::Column::OptionValue)
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
