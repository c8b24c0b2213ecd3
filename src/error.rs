//! HTTP error type and its JSON rendering.
//!
//! Every failure leaves the service as
//! `{"success": false, "error": "...", "code"?: "...", "upstream"?: {...}}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::domain::RedeemError;

/// Error envelope returned to callers.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream: Option<Value>,
}

#[derive(Debug)]
pub enum AppError {
    Validation {
        message: String,
    },
    Upstream {
        status: StatusCode,
        message: String,
        code: Option<String>,
        upstream: Value,
    },
    Internal {
        message: String,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => *status,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RedeemError> for AppError {
    fn from(err: RedeemError) -> Self {
        let message = err.user_message();

        match err {
            RedeemError::Validation { .. } | RedeemError::Extraction => {
                Self::Validation { message }
            }
            RedeemError::Upstream {
                http_status,
                code,
                body,
                ..
            } => Self::Upstream {
                status: upstream_status(http_status),
                message,
                code,
                upstream: body,
            },
            RedeemError::Network { .. } | RedeemError::Unclassified(_) => {
                Self::Internal { message }
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort_unstable();

        Self::bad_request(format!("missing required field: {}", fields.join(", ")))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(format!("invalid request body: {}", rejection.body_text()))
    }
}

/// Relays the upstream status when it is an error status, 502 otherwise.
fn upstream_status(http_status: u16) -> StatusCode {
    StatusCode::from_u16(http_status)
        .ok()
        .filter(|status| status.is_client_error() || status.is_server_error())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Validation { message } | AppError::Internal { message } => ErrorBody {
                success: false,
                error: message,
                code: None,
                upstream: None,
            },
            AppError::Upstream {
                message,
                code,
                upstream,
                ..
            } => ErrorBody {
                success: false,
                error: message,
                code,
                upstream: Some(upstream),
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_and_extraction_are_bad_request() {
        let validation: AppError = RedeemError::Validation {
            fields: vec!["mobile_number"],
        }
        .into();
        let extraction: AppError = RedeemError::Extraction.into();

        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(extraction.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_network_and_unclassified_are_internal() {
        let network: AppError = RedeemError::network().into();
        let other: AppError = RedeemError::Unclassified("boom".to_string()).into();

        assert_eq!(network.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(other.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_status_is_relayed() {
        let err: AppError =
            RedeemError::upstream(404, json!({ "code": "VOUCHER_NOT_FOUND" })).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        match err {
            AppError::Upstream { code, upstream, .. } => {
                assert_eq!(code.as_deref(), Some("VOUCHER_NOT_FOUND"));
                assert_eq!(upstream, json!({ "code": "VOUCHER_NOT_FOUND" }));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_non_error_upstream_status_becomes_bad_gateway() {
        assert_eq!(upstream_status(302), StatusCode::BAD_GATEWAY);
        assert_eq!(upstream_status(999), StatusCode::BAD_GATEWAY);
        assert_eq!(upstream_status(503), StatusCode::SERVICE_UNAVAILABLE);
    }
}
