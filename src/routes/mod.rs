use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{error, Config};

mod health;
mod home;
mod info;
mod metrics;

// ---

/// Build the application router: the route table, the JSON 404 and 405
/// fallbacks, panic recovery and request tracing.
pub fn router(config: Config) -> Router {
    // ---
    let routes = Router::new()
        .merge(home::router())
        .merge(health::router())
        .merge(metrics::router())
        .merge(info::router());

    dispatcher(routes, config)
}

fn dispatcher(routes: Router<Config>, config: Config) -> Router {
    // ---
    routes
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::method_not_allowed)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}
