use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A request field failed validation.
///
/// Rendered as 422 Unprocessable Entity with code 1 and the message below.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The {0} field is required.")]
    Required(&'static str),

    #[error("The {0} must be a valid email address.")]
    InvalidEmail(&'static str),

    #[error("The {field} must be between {min} and {max} characters.")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("The {0} may not be greater than {1} characters.")]
    TooLong(&'static str, usize),

    #[error("The {0} contains special characters.")]
    SpecialChars(&'static str),

    #[error("The {0} has already been taken.")]
    Taken(&'static str),

    #[error("The {0} format is invalid.")]
    Format(&'static str),

    #[error("Wrong captcha.")]
    Captcha,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDto::new(1, self.to_string())),
        )
            .into_response()
    }
}
