//! Request-scoped helpers shared by controllers: session authentication, typed
//! session access and client address extraction.

pub mod auth;
pub mod ip;
pub mod session;
