//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, UpstreamInfo};
use crate::state::AppState;

/// Returns service liveness and the upstream settings in effect.
///
/// # Endpoint
///
/// `GET /health`
///
/// Does not contact the upstream.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream: UpstreamInfo {
            base_url: state.redemption_service.upstream_base_url(),
            request_timeout_ms: state.request_timeout_ms,
        },
    })
}
