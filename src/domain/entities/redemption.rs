//! Redemption request built by the orchestrator for the upstream call.

use serde::Serialize;

use super::CampaignCode;

/// A redemption ready to be sent upstream.
///
/// Can only be built from an already extracted [`CampaignCode`], so a request
/// never exists for a link that failed extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionRequest {
    pub mobile_number: String,
    pub campaign_code: CampaignCode,
}

/// JSON body posted to the upstream redeem endpoint.
#[derive(Debug, Serialize)]
pub struct UpstreamRedeemBody<'a> {
    pub mobile: &'a str,
}

impl RedemptionRequest {
    pub fn new(mobile_number: impl Into<String>, campaign_code: CampaignCode) -> Self {
        Self {
            mobile_number: mobile_number.into(),
            campaign_code,
        }
    }

    /// Path of the upstream redeem endpoint, relative to the service base URL.
    pub fn upstream_path(&self) -> String {
        format!(
            "/campaign/vouchers/{}/redeem",
            self.campaign_code.url_encoded()
        )
    }

    pub fn upstream_body(&self) -> UpstreamRedeemBody<'_> {
        UpstreamRedeemBody {
            mobile: &self.mobile_number,
        }
    }

    /// Mobile number with the middle digits hidden, for log output.
    pub fn masked_mobile(&self) -> String {
        mask_mobile(&self.mobile_number)
    }
}

/// Masks all but the first three and last three characters.
///
/// Numbers of six characters or fewer are fully masked.
pub fn mask_mobile(mobile: &str) -> String {
    let chars: Vec<char> = mobile.chars().collect();
    if chars.len() <= 6 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 3..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 6), tail)
}
