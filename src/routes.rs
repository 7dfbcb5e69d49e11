//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`        - Create a short link
//! - `GET  /shorturls`        - List all links
//! - `GET  /shorturls/{code}` - Statistics for one link
//! - `GET  /health`           - Health check
//! - `GET  /{code}`           - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    health_handler, redirect_handler, shorten_handler, stats_handler, stats_list_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The catch-all redirect route is registered last so the static
/// `/shorturls` and `/health` paths take precedence, which is also why
/// those names are reserved shortcodes.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorturls", get(stats_list_handler).post(shorten_handler))
        .route("/shorturls/{code}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
