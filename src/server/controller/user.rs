use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        user::{ChangePasswordDto, UserDto},
    },
    server::{
        data::player::PlayerRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{auth::ChangePasswordParam, user::Permission},
        service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Signed-in user", body = UserDto),
        (status = 401, description = "Not logged in or session expired", body = ErrorDto),
        (status = 403, description = "User is banned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.app_key)
        .require(Permission::Normal)
        .await?;

    let players = PlayerRepository::new(&state.db).get_by_owner(user.uid).await?;

    Ok((StatusCode::OK, Json(user.into_dto(players))))
}

#[utoipa::path(
    post,
    path = "/api/user/password",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed (code 0) or current password wrong (code 1); the session ends on success", body = StatusDto),
        (status = 401, description = "Not logged in or session expired", body = ErrorDto),
        (status = 422, description = "Invalid new password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.app_key)
        .require(Permission::Normal)
        .await?;

    UserService::new(&state.db)
        .change_password(&user, &session, ChangePasswordParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto::ok("Password changed. Please log in again.")),
    ))
}
