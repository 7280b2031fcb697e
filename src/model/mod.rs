//! Request and response DTOs shared by the HTTP API.

pub mod api;
pub mod auth;
pub mod option;
pub mod user;
