//! Failure taxonomy of a redemption attempt.

use serde_json::Value;

use super::upstream_error_code::{UpstreamErrorCode, fallback_message};

/// Reason reported when the upstream call produced no response.
pub const NO_RESPONSE_REASON: &str = "no response from campaign server";

/// Every way a redemption can fail.
///
/// The orchestrator resolves all failures into one of these variants; the HTTP
/// layer renders them through [`crate::error::AppError`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RedeemError {
    /// Required input missing. Raised before extraction.
    #[error("missing required field: {}", .fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    /// No extraction strategy produced a code. Raised before any network call.
    #[error("cannot extract campaign code from campaign link")]
    Extraction,

    /// Upstream answered with a non-success status.
    ///
    /// `message` is the stringified upstream body; `body` is the raw payload.
    #[error("HTTP {http_status} - {message}")]
    Upstream {
        http_status: u16,
        code: Option<String>,
        message: String,
        body: Value,
    },

    /// Request dispatched but nothing came back (timeout, connect, reset).
    #[error("{reason}")]
    Network { reason: String },

    /// Anything else that went wrong while building or sending the request.
    #[error("failed to send redemption request: {0}")]
    Unclassified(String),
}

impl RedeemError {
    pub fn network() -> Self {
        Self::Network {
            reason: NO_RESPONSE_REASON.to_string(),
        }
    }

    /// Builds an [`RedeemError::Upstream`] from a status and the upstream body.
    ///
    /// The code is read from a top-level `code` field or from `status.code`.
    pub fn upstream(http_status: u16, body: Value) -> Self {
        let code = body
            .get("code")
            .or_else(|| body.pointer("/status/code"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Self::Upstream {
            http_status,
            code,
            message: stringify_body(&body),
            body,
        }
    }

    /// Short machine-readable tag, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::Extraction => "extraction",
            Self::Upstream { .. } => "upstream",
            Self::Network { .. } => "network",
            Self::Unclassified(_) => "unclassified",
        }
    }

    /// Parsed upstream code, if the upstream supplied one.
    pub fn upstream_code(&self) -> Option<UpstreamErrorCode> {
        match self {
            Self::Upstream {
                code: Some(code), ..
            } => Some(UpstreamErrorCode::parse(code)),
            _ => None,
        }
    }

    /// Human-readable message for the caller.
    ///
    /// Upstream failures go through the [`UpstreamErrorCode`] table; other
    /// variants use their display text.
    pub fn user_message(&self) -> String {
        match self {
            Self::Upstream { body, message, .. } => {
                let upstream_text = upstream_message(body).unwrap_or(message.as_str());
                match self.upstream_code() {
                    Some(code) => code.user_message(upstream_text),
                    None => fallback_message(upstream_text),
                }
            }
            other => other.to_string(),
        }
    }
}

/// Message text supplied by the upstream, if any.
fn upstream_message(body: &Value) -> Option<&str> {
    body.pointer("/status/message")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
}

fn stringify_body(body: &Value) -> String {
    match body {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
