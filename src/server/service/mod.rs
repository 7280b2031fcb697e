//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They validate input in the order clients observe, gate flows behind the option store,
//! and coordinate multiple repository calls, session state and the mail transport.

pub mod auth;
pub mod captcha;
pub mod mail;
pub mod option;
pub mod user;
