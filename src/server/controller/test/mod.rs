use std::net::SocketAddr;

use axum::{
    body::{to_bytes, Body},
    extract::ConnectInfo,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError, router::router, state::AppState};
use test_utils::{builder::TestBuilder, context::TestContext, factory};


const APP_KEY: &str = "test-application-key-with-32-chars!";

/// Address the test requests appear to come from.
const PEER: &str = "203.0.113.7:50000";

/// Builds the full application on the test database, the way `main` wires it.
///
/// The session table is migrated by the context, so the session layer can share the
/// same in-memory database.
async fn app(test: &mut TestContext) -> Result<Router, AppError> {
    let (db, _) = test.db_and_session().await.unwrap();

    let config = Config::from_lookup(|name| match name {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        "APP_URL" => Some("https://skins.example.com".to_string()),
        "APP_KEY" => Some(APP_KEY.to_string()),
        _ => None,
    })?;

    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    let state = AppState::new(db.clone(), None, &config);

    Ok(router(false)?
        .with_state(state)
        .layer(SessionManagerLayer::new(store)))
}

/// Sends a request from [`PEER`], optionally with a JSON body and a session cookie.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    json: Option<serde_json::Value>,
    cookie: Option<&str>,
) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let body = match json {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let mut request = request.body(body).unwrap();
    request
        .extensions_mut()
        .insert(ConnectInfo(PEER.parse::<SocketAddr>().unwrap()));

    app.clone().oneshot(request).await.unwrap()
}

/// Returns the `name=value` pair of the session cookie set by a response.
fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

async fn json_body(response: Response) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
