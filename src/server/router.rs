use std::sync::Arc;

use axum::Router;
use tower_governor::{
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
    GovernorLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, admin::ADMIN_TAG, auth::AUTH_TAG, user::USER_TAG},
    error::AppError,
    state::AppState,
};

/// Replenish one request slot every this many seconds per client.
const AUTH_RATE_LIMIT_PERIOD_SECONDS: u64 = 2;
const AUTH_RATE_LIMIT_BURST: u32 = 10;

#[derive(OpenApi)]
#[openapi(
    info(title = "Skin Server"),
    tags(
        (name = AUTH_TAG, description = "Login, registration and password reset"),
        (name = USER_TAG, description = "Signed-in user"),
        (name = ADMIN_TAG, description = "Site administration")
    )
)]
struct ApiDoc;

/// Builds the API router with its OpenAPI document.
///
/// The POST auth endpoints are rate limited per client address. With `trust_proxy`
/// the address is taken from proxy headers, otherwise from the TCP peer.
///
/// # Returns
/// - `Ok(Router)` - Router serving the API and Swagger UI at `/api/docs`
/// - `Err(AppError::InternalError)` - Invalid rate limit configuration
pub fn router(trust_proxy: bool) -> Result<Router<AppState>, AppError> {
    let auth = OpenApiRouter::new()
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::forgot))
        .routes(routes!(controller::auth::reset));

    let auth = if trust_proxy {
        let config = GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(AUTH_RATE_LIMIT_PERIOD_SECONDS)
            .burst_size(AUTH_RATE_LIMIT_BURST)
            .finish()
            .ok_or_else(rate_limit_error)?;
        auth.route_layer(GovernorLayer::new(Arc::new(config)))
    } else {
        let config = GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(AUTH_RATE_LIMIT_PERIOD_SECONDS)
            .burst_size(AUTH_RATE_LIMIT_BURST)
            .finish()
            .ok_or_else(rate_limit_error)?;
        auth.route_layer(GovernorLayer::new(Arc::new(config)))
    };

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(auth)
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::captcha::captcha))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::change_password))
        .routes(routes!(
            controller::admin::get_options,
            controller::admin::update_options
        ))
        .routes(routes!(controller::admin::set_permission))
        .split_for_parts();

    Ok(router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api)))
}

fn rate_limit_error() -> AppError {
    AppError::InternalError("Invalid auth rate limit configuration".to_string())
}
