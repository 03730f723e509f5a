// src/routes/home.rs
//! Landing endpoint reporting who and where this instance is.

use axum::{extract::State, routing::get, Json, Router};

use crate::{models::now_timestamp, Config, HomeResponse};

// ---

pub fn router() -> Router<Config> {
    // ---
    Router::new().route("/", get(home))
}

/// Handle `GET /`.
async fn home(State(config): State<Config>) -> Json<HomeResponse> {
    Json(HomeResponse::new(&config, now_timestamp()))
}
