//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub upstream: UpstreamInfo,
}

/// Upstream voucher service settings in effect.
#[derive(Debug, Serialize)]
pub struct UpstreamInfo {
    pub base_url: String,
    pub request_timeout_ms: u64,
}
