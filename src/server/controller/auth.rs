use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        auth::{AuthenticatedDto, ForgotPasswordDto, LoginDto, RegisterDto, ResetPasswordDto},
    },
    server::{
        error::AppError,
        middleware::ip::ClientIp,
        model::auth::{
            Authenticated, ForgotPasswordParam, LoginParam, RegisterParam, ResetPasswordParam,
        },
        service::auth::{password::PasswordResetService, AuthService},
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

fn authenticated_dto(authenticated: Authenticated, message: &str) -> AuthenticatedDto {
    AuthenticatedDto {
        code: 0,
        message: message.to_string(),
        token: authenticated.token,
    }
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in (code 0) or rejected (code 1 wrong password, 2 no such user, 5 banned)", body = AuthenticatedDto),
        (status = 422, description = "Invalid field or wrong captcha", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthService::new(&state.db, &session, &state.app_key)
        .login(LoginParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(authenticated_dto(authenticated, "Logged in successfully.")),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out (code 0) or no session (code 1)", body = StatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &session, &state.app_key)
        .logout()
        .await?;

    Ok((StatusCode::OK, Json(StatusDto::ok("Logged out."))))
}

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Registered and logged in (code 0) or registration refused (code 7)", body = AuthenticatedDto),
        (status = 422, description = "Invalid or taken field, or wrong captcha", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthService::new(&state.db, &session, &state.app_key)
        .register(RegisterParam::from_dto(payload, ip))
        .await?;

    Ok((
        StatusCode::OK,
        Json(authenticated_dto(authenticated, "Registered successfully.")),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/forgot",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Mail sent (code 0), refused (code 1) or delivery failed (code 2)", body = StatusDto),
        (status = 422, description = "Invalid email or wrong captcha", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    PasswordResetService::new(&state.db, state.mailer.as_deref(), &state.reset_links)
        .forgot(&session, ForgotPasswordParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto::ok("A password reset link has been sent to your email.")),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/reset/{token}",
    tag = AUTH_TAG,
    params(
        ("token" = String, Path, description = "Signed reset token from the mailed link")
    ),
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = StatusDto),
        (status = 403, description = "Invalid, expired or used link", body = ErrorDto),
        (status = 422, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    PasswordResetService::new(&state.db, state.mailer.as_deref(), &state.reset_links)
        .reset(ResetPasswordParam::from_dto(token, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto::ok("Your password has been reset.")),
    ))
}
