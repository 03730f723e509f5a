// src/routes/info.rs
//! Detailed application information, including what the server observed
//! about the calling request.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    routing::get,
    Json, Router,
};

use crate::{ApiError, Config, InfoResponse, RequestInfo};

// ---

pub fn router() -> Router<Config> {
    // ---
    Router::new().route("/api/info", get(info))
}

/// Handle `GET /api/info`.
///
/// The client address comes from the [`ConnectInfo`] the server attaches to
/// each connection. A request without it cannot be described and is treated
/// as a handler fault.
async fn info(
    State(config): State<Config>,
    request: Request,
) -> Result<Json<InfoResponse>, ApiError> {
    // ---
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .ok_or_else(|| ApiError::Internal("client address missing from request".to_string()))?;

    tracing::debug!("GET /api/info from {}", remote);

    let observed = RequestInfo {
        method: request.method().as_str().to_string(),
        path: request.uri().path().to_string(),
        remote_addr: remote.to_string(),
    };

    Ok(Json(InfoResponse::new(&config, observed)))
}
