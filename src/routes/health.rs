// src/routes/health.rs
//! Liveness and readiness probes for the demo service.
//!
//! This module defines the `/health` and `/ready` routes used by container
//! orchestrators (e.g., Kubernetes) to decide whether to restart a pod and
//! whether to send it traffic. It follows the Explicit Module Boundary
//! Pattern (EMBP):
//! - Internal to this file: the probe handlers
//! - Exports to the gateway (`mod.rs`): a subrouter containing both routes
//!
//! Both probes are deliberately unconditional. They touch no dependencies
//! and succeed for as long as the process can answer HTTP.

use axum::{routing::get, Json, Router};

use crate::{models::now_timestamp, ProbeResponse};

/// Handle `GET /health`.
///
/// Liveness: the process is running and responsive.
async fn health() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "healthy".to_string(),
        timestamp: now_timestamp(),
    })
}

/// Handle `GET /ready`.
///
/// Readiness: the instance may receive traffic. Dependency checks (database
/// connections and the like) belong here once the service has any.
async fn ready() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "ready".to_string(),
        timestamp: now_timestamp(),
    })
}

/// Create a subrouter containing the `/health` and `/ready` routes.
///
/// This router is generic over the application state so it can merge cleanly
/// with the gateway router, regardless of the state type.
///
/// # Type Parameters
/// - `S`: Application state type shared by all routes in the gateway.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
}
