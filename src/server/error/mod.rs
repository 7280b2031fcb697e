//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by every controller. Domain errors
//! (`AuthError`, `ValidationError`) render the `{ code, message }` body clients expect,
//! while infrastructure failures are logged server-side and collapsed into a generic
//! 500 response.

pub mod auth;
pub mod config;
pub mod mail;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, mail::MailError, validation::ValidationError,
    },
};

/// Response code used for unexpected server failures.
pub const INTERNAL_ERROR_CODE: i32 = -1;

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`. Domain-specific
/// errors handle their own response mapping, while library errors become 500s.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication, registration or password reset failure.
    ///
    /// Delegates to `AuthError::into_response()` for code and status mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request field failed validation.
    ///
    /// Results in 422 Unprocessable Entity with code 1.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Mail transport could not be built or failed outside of a user flow.
    #[error(transparent)]
    MailErr(#[from] MailError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error, raised by the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket binding or serving error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(1, msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details never reach
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(
                INTERNAL_ERROR_CODE,
                "Internal server error".to_string(),
            )),
        )
            .into_response()
    }
}
