//! SeaORM entities for the skin server schema.

pub mod prelude;

pub mod option;
pub mod player;
pub mod user;
