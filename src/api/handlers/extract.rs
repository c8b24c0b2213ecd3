//! Handler for campaign code extraction endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::extract::{ExtractRequest, ExtractResponse};
use crate::domain::RedeemError;
use crate::error::AppError;
use crate::state::AppState;

/// Extracts the campaign code from a link without redeeming it.
///
/// # Endpoint
///
/// `POST /extract`
///
/// # Response
///
/// ```json
/// { "success": true, "campaign_code": "ABC123", "strategy": "vouchers_path" }
/// ```
///
/// # Errors
///
/// Returns 400 if the link is missing, is not a string, or yields no code.
pub async fn extract_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let campaign_link = payload
        .campaign_link
        .as_text()
        .ok_or(RedeemError::Extraction)?;
    let (code, strategy) = state.redemption_service.extract(campaign_link)?;

    Ok(Json(ExtractResponse {
        success: true,
        campaign_code: code.into_inner(),
        strategy,
    }))
}
