use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        option::{SiteOptionsDto, UpdateSiteOptionsDto},
        user::{SetPermissionDto, UserDto},
    },
    server::{
        data::player::PlayerRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{Permission, SetPermissionParam},
        service::{option::OptionService, user::UserService},
        state::AppState,
    },
};

pub static ADMIN_TAG: &str = "admin";

#[utoipa::path(
    get,
    path = "/api/admin/options",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Current site options", body = SiteOptionsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_options(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session, &state.app_key)
        .require(Permission::Admin)
        .await?;

    let options = OptionService::new(&state.db).load().await?;

    Ok((StatusCode::OK, Json(options.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/options",
    tag = ADMIN_TAG,
    request_body = UpdateSiteOptionsDto,
    responses(
        (status = 200, description = "Site options after the update", body = SiteOptionsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 422, description = "Invalid option value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_options(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateSiteOptionsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session, &state.app_key)
        .require(Permission::Admin)
        .await?;

    let options = OptionService::new(&state.db).update(payload).await?;

    Ok((StatusCode::OK, Json(options.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{uid}/permission",
    tag = ADMIN_TAG,
    params(
        ("uid" = i32, Path, description = "Target user ID")
    ),
    request_body = SetPermissionDto,
    responses(
        (status = 200, description = "User with the new permission level", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Change not allowed for this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Unknown permission level", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_permission(
    State(state): State<AppState>,
    session: Session,
    Path(uid): Path<i32>,
    Json(payload): Json<SetPermissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session, &state.app_key)
        .require(Permission::Admin)
        .await?;

    let user = UserService::new(&state.db)
        .set_permission(&actor, SetPermissionParam::from_dto(uid, payload)?)
        .await?;

    let players = PlayerRepository::new(&state.db).get_by_owner(user.uid).await?;

    Ok((StatusCode::OK, Json(user.into_dto(players))))
}
