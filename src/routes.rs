//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /redeem`  - Voucher redemption
//! - `POST /extract` - Campaign code extraction only
//! - `GET  /health`  - Liveness and upstream settings
//!
//! # Middleware
//!
//! - **Access log** - One combined-format line per request
//! - **Tracing** - Structured request/response spans
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{access_log, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::public_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(middleware::from_fn(access_log::layer))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
