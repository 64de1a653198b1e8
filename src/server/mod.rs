//! HTTP server wiring: routes, middleware, shared state.
//!
//! [`build_app_router`] is used by both the binary and the integration
//! tests, so they exercise the exact same middleware stack.

pub mod error;
pub mod handlers;
pub mod html;
pub mod state;

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use state::AppState;

/// Largest accepted spreadsheet upload, in bytes
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the full application [`Router`] with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. Upload body size limit
/// 2. Structured request/response tracing
/// 3. Request timeout
/// 4. Panic recovery (catch panics, return 500)
pub fn build_app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/products", post(handlers::upload_products))
        .route("/labels", post(handlers::create_label))
        .route("/health", get(handlers::health))
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500.
        .layer(CatchPanicLayer::new())
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Spreadsheet uploads are larger than the default body limit.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        // Shared state.
        .with_state(state)
}
