//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RedemptionService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub redemption_service: Arc<RedemptionService>,
    /// Upstream timeout, reported by the health endpoint.
    pub request_timeout_ms: u64,
}

impl AppState {
    pub fn new(redemption_service: Arc<RedemptionService>, config: &Config) -> Self {
        Self {
            redemption_service,
            request_timeout_ms: config.request_timeout_ms,
        }
    }
}
