//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//!
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .permission(1)
//!     .build()
//!     .await?;
//!
//! let (user, player) = factory::helpers::create_user_with_player(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities (passwords are hashed with Argon2)
//! - `player` - Create player entities owned by a user
//! - `option` - Write option store rows
//! - `helpers` - ID generation and multi-entity helpers

pub mod helpers;
pub mod option;
pub mod player;
pub mod user;

pub use option::set_option;
pub use player::create_player;
pub use user::create_user;
