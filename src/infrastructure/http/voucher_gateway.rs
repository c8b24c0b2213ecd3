//! reqwest-backed client for the upstream voucher service.

use crate::config::Config;
use crate::domain::entities::RedemptionRequest;
use crate::domain::gateways::{GatewayError, UpstreamResponse, VoucherGateway};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;

/// Upstream gateway issuing `POST {base}/campaign/vouchers/{code}/redeem`.
///
/// One attempt per call. The whole exchange, body included, is bounded by
/// the timeout given at construction.
#[derive(Debug, Clone)]
pub struct HttpVoucherGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpVoucherGateway {
    /// Creates a gateway for `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Request`] if the HTTP client cannot be built
    /// (e.g. TLS backend initialisation failure).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a gateway from `VOUCHER_BASE_URL` and `REQUEST_TIMEOUT_MS`.
    pub fn from_config(config: &Config) -> Result<Self, GatewayError> {
        Self::new(config.voucher_base_url.clone(), config.request_timeout())
    }

    fn endpoint(&self, request: &RedemptionRequest) -> String {
        format!("{}{}", self.base_url, request.upstream_path())
    }
}

#[async_trait]
impl VoucherGateway for HttpVoucherGateway {
    async fn redeem(&self, request: &RedemptionRequest) -> Result<UpstreamResponse, GatewayError> {
        let url = self.endpoint(request);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&request.upstream_body())
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(classify_error)?;

        tracing::debug!(status, bytes = bytes.len(), "Upstream responded");

        Ok(UpstreamResponse {
            status,
            body: parse_body(&bytes),
        })
    }

    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}

/// Splits reqwest failures into "never got an answer" and everything else.
fn classify_error(err: reqwest::Error) -> GatewayError {
    if err.is_builder() {
        return GatewayError::Request(err.to_string());
    }

    if err.is_timeout() || err.is_connect() || err.is_request() || err.is_body() || err.is_decode()
    {
        GatewayError::NoResponse(err.to_string())
    } else {
        GatewayError::Request(err.to_string())
    }
}

/// Parses the body as JSON, falling back to a JSON string of the raw text.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
