//! Option store helpers.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an option row.
///
/// Tests start from an empty option table, so a plain insert is enough.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Option name
/// - `value` - Raw option value as stored in the table
pub async fn set_option(
    db: &DatabaseConnection,
    name: &str,
    value: impl Into<String>,
) -> Result<entity::option::Model, DbErr> {
    entity::option::ActiveModel {
        option_name: ActiveValue::Set(name.to_string()),
        option_value: ActiveValue::Set(value.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
