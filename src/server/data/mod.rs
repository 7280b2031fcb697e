//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never touches entities. They are generic over the connection so the
//! same code runs inside a transaction.

pub mod option;
pub mod player;
pub mod user;
