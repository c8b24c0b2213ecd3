//! Handler for voucher redemption endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::redeem::{RedeemRequest, RedeemResponse};
use crate::domain::RedeemError;
use crate::error::AppError;
use crate::state::AppState;

/// Redeems a gift voucher for a mobile number.
///
/// # Endpoint
///
/// `POST /redeem`
///
/// # Request Body
///
/// ```json
/// {
///   "mobile_number": "0812345678",
///   "campaign_link": "https://gift.truemoney.com/campaign/?v=019a7f3c"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "data": { "status": { "code": "SUCCESS" }, "data": { } } }
/// ```
///
/// # Errors
///
/// - **400**: missing or `null` field, or no campaign code in the link
/// - **4xx/5xx**: upstream rejection, relayed with `code` and raw `upstream` body
/// - **500**: upstream did not answer in time
pub async fn redeem_handler(
    State(state): State<AppState>,
    payload: Result<Json<RedeemRequest>, JsonRejection>,
) -> Result<Json<RedeemResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    // A non-string link carries no code; a non-string mobile is treated as absent.
    let Some(campaign_link) = payload.campaign_link.as_text() else {
        return Err(RedeemError::Extraction.into());
    };
    let mobile_number = payload.mobile_number.as_text().unwrap_or_default();

    let data = state
        .redemption_service
        .redeem(mobile_number, campaign_link)
        .await
        .map_err(|err| {
            tracing::error!(kind = err.kind(), error = %err, "Redeem failed");
            AppError::from(err)
        })?;

    Ok(Json(RedeemResponse {
        success: true,
        data,
    }))
}
