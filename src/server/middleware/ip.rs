//! Client address extraction.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, HeaderMap},
};

use crate::server::{error::AppError, state::AppState};

/// Address of the client that sent the request.
///
/// With `TRUST_PROXY` enabled the first `X-Forwarded-For` entry (or `X-Real-IP`) is
/// used; otherwise the peer address of the TCP connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl FromRequestParts<AppState> for ClientIp {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.trust_proxy {
            if let Some(ip) = forwarded_ip(&parts.headers) {
                return Ok(Self(ip));
            }
        }

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .ok_or_else(|| {
                AppError::InternalError("Connection info missing from request".to_string())
            })?;

        Ok(Self(peer))
    }
}

/// Reads the client address set by a reverse proxy.
pub fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    let forwarded_for = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let real_ip = || {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    forwarded_for.or_else(real_ip).map(str::to_string)
}
