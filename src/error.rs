//! Client-visible error kinds and their JSON envelopes.
//!
//! [`ApiError::NotFound`] covers unmatched paths, [`ApiError::MethodNotAllowed`]
//! a known path hit with a method it does not serve, and [`ApiError::Internal`]
//! any fault raised while handling a request, including panics caught by
//! [`handle_panic`]. The fault message is logged server-side and never written
//! into the response body.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorBody;

// ---

#[derive(Debug, Error)]
pub enum ApiError {
    // ---
    #[error("no route matches the requested path")]
    NotFound,

    #[error("method not allowed for the requested path")]
    MethodNotAllowed,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        // ---
        let (error, message) = match self {
            ApiError::NotFound => ("Not Found", "The requested resource does not exist"),
            ApiError::MethodNotAllowed => (
                "Method Not Allowed",
                "The method is not allowed for the requested URL",
            ),
            ApiError::Internal(_) => ("Internal Server Error", "An unexpected error occurred"),
        };

        ErrorBody {
            error: error.to_string(),
            message: message.to_string(),
            status: self.status().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        if let ApiError::Internal(ref fault) = self {
            tracing::error!("Internal server error: {}", fault);
        }

        (self.status(), Json(self.body())).into_response()
    }
}

/// Fallback handler for paths with no registered route.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for a known path requested with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Convert a panic payload from a handler into the 500 envelope.
///
/// Installed through `tower_http::catch_panic::CatchPanicLayer::custom`, so a
/// panicking handler costs one request, not the listener.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    // ---
    let fault = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", fault)).into_response()
}
