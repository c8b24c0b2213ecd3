//! DTOs for the redemption endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use super::field::{TextField, required};

/// Request to redeem a voucher for a mobile number.
///
/// Absent, `null` and empty fields are reported by validation rather than by
/// the JSON extractor.
#[derive(Debug, Deserialize, Validate)]
pub struct RedeemRequest {
    #[serde(default)]
    #[validate(custom(function = "required"))]
    pub mobile_number: TextField,

    /// Campaign link in any supported format.
    #[serde(default)]
    #[validate(custom(function = "required"))]
    pub campaign_link: TextField,
}

/// Successful redemption, carrying the upstream payload untouched.
#[derive(Debug, Serialize)]
pub struct RedeemResponse {
    pub success: bool,
    pub data: Value,
}
