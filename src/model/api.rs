use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain `{ code, message }` response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StatusDto {
    pub code: i32,
    pub message: String,
}

impl StatusDto {
    /// Successful response (code 0) with the given message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            code: 0,
            message: message.into(),
        }
    }
}

/// Failure response body.
///
/// `login_fails` is only present on wrong-password responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_fails: Option<u32>,
}

impl ErrorDto {
    pub fn new(code: i32, message: String) -> Self {
        Self {
            code,
            message,
            login_fails: None,
        }
    }
}
