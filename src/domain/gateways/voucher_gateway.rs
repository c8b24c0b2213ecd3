//! Gateway trait for the upstream voucher service.

use crate::domain::entities::RedemptionRequest;
use async_trait::async_trait;
use serde_json::Value;

/// Raw answer of the upstream service, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    /// Parsed JSON body, or a JSON string holding the raw text when the body
    /// is not JSON. `Value::Null` for an empty body.
    pub body: Value,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failures of a gateway call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// The request went out but no response came back.
    #[error("no response: {0}")]
    NoResponse(String),

    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),
}

/// Sends redemption requests to the upstream voucher service.
///
/// Implementations make exactly one attempt per call and must bound the call
/// with a timeout, reporting expiry as [`GatewayError::NoResponse`].
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpVoucherGateway`] - reqwest-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoucherGateway: Send + Sync {
    /// Posts the redemption and returns the upstream answer, success or not.
    async fn redeem(&self, request: &RedemptionRequest) -> Result<UpstreamResponse, GatewayError>;

    /// Base URL the gateway talks to, for diagnostics.
    fn base_url(&self) -> String;
}
