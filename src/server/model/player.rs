//! Player domain models and parameters.

use chrono::{DateTime, Utc};

/// Game character bound to a user; its name doubles as a login identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pid: i32,
    pub uid: i32,
    pub name: String,
    pub last_modified: DateTime<Utc>,
}

impl Player {
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            pid: entity.pid,
            uid: entity.uid,
            name: entity.name,
            last_modified: entity.last_modified,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlayerParam {
    pub uid: i32,
    pub name: String,
}
