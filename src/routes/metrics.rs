// src/routes/metrics.rs
//! Basic metrics endpoint.
//!
//! Reports static deployment metadata only. `uptime` is a fixed placeholder
//! string; no process counters are collected.

use axum::{extract::State, routing::get, Json, Router};

use crate::{Config, MetricsResponse};

// ---

pub fn router() -> Router<Config> {
    // ---
    Router::new().route("/metrics", get(metrics))
}

async fn metrics(State(config): State<Config>) -> Json<MetricsResponse> {
    Json(MetricsResponse::from(&config))
}
