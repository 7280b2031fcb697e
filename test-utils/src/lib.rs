//! Skin Server Test Utils
//!
//! Shared testing utilities for the skin server. This crate offers a builder for creating
//! test contexts backed by in-memory SQLite databases, a lazily created session backed by
//! the same database, and factories that insert users, players and options with sensible
//! defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn logs_in() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_auth_tables().build().await?;
//!     let (db, session) = test.db_and_session().await?;
//!
//!     let user = factory::user::UserFactory::new(db)
//!         .email("steve@example.com")
//!         .password("correct-horse")
//!         .build()
//!         .await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
