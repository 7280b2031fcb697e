use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::api::ErrorDto,
    server::{controller::auth::AUTH_TAG, error::AppError, service::captcha::CaptchaService},
};

#[utoipa::path(
    get,
    path = "/auth/captcha",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "CAPTCHA image; the answer is stored in the session", body = Vec<u8>, content_type = "image/png"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn captcha(session: Session) -> Result<impl IntoResponse, AppError> {
    let png = CaptchaService::new(&session).issue().await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        png,
    ))
}
