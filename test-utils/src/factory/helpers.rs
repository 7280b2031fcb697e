//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a player they own.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, player))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_player(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::player::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let player = crate::factory::player::create_player(db, user.uid).await?;

    Ok((user, player))
}
