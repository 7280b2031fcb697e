//! HTTP handlers.
//!
//! Controllers extract DTOs, the session and the client address, call a service and
//! convert the resulting domain model into a response DTO.

pub mod admin;
pub mod auth;
pub mod captcha;
pub mod user;

#[cfg(test)]
mod test;
