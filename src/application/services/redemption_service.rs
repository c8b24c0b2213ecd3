//! Voucher redemption orchestration.

use std::sync::Arc;

use crate::domain::RedeemError;
use crate::domain::entities::{CampaignCode, RedemptionRequest};
use crate::domain::gateways::{GatewayError, VoucherGateway};
use crate::utils::code_extractor::{
    ExtractionStrategy, extract_campaign_code, extract_with_strategy,
};
use serde_json::Value;

/// Service turning a (mobile number, campaign link) pair into a redemption.
///
/// Validates input, extracts the campaign code, calls the upstream gateway
/// once and resolves every failure into a [`RedeemError`] variant. Holds no
/// mutable state, so one instance serves all requests concurrently.
pub struct RedemptionService {
    gateway: Arc<dyn VoucherGateway>,
}

impl RedemptionService {
    /// Creates a new redemption service.
    pub fn new(gateway: Arc<dyn VoucherGateway>) -> Self {
        Self { gateway }
    }

    /// Redeems the voucher referenced by `campaign_link` for `mobile_number`.
    ///
    /// On success returns the upstream payload unmodified.
    ///
    /// # Errors
    ///
    /// - [`RedeemError::Validation`] if either input is empty
    /// - [`RedeemError::Extraction`] if no code can be extracted from the link
    /// - [`RedeemError::Upstream`] if the upstream answered with a non-2xx status
    /// - [`RedeemError::Network`] if the upstream did not answer in time
    /// - [`RedeemError::Unclassified`] if the request could not be sent
    ///
    /// Validation and extraction failures never reach the gateway.
    pub async fn redeem(
        &self,
        mobile_number: &str,
        campaign_link: &str,
    ) -> Result<Value, RedeemError> {
        let mut missing = Vec::new();
        if mobile_number.is_empty() {
            missing.push("mobile_number");
        }
        if campaign_link.is_empty() {
            missing.push("campaign_link");
        }
        if !missing.is_empty() {
            return Err(RedeemError::Validation { fields: missing });
        }

        let code = extract_campaign_code(campaign_link).ok_or(RedeemError::Extraction)?;
        let request = RedemptionRequest::new(mobile_number, code);

        tracing::info!(
            mobile = %request.masked_mobile(),
            code = %request.campaign_code,
            "Redeeming voucher"
        );

        let response = self
            .gateway
            .redeem(&request)
            .await
            .map_err(|err| match err {
                GatewayError::NoResponse(detail) => {
                    tracing::warn!(code = %request.campaign_code, %detail, "No response from upstream");
                    RedeemError::network()
                }
                GatewayError::Request(detail) => {
                    tracing::error!(code = %request.campaign_code, %detail, "Upstream request failed");
                    RedeemError::Unclassified(detail)
                }
            })?;

        if response.is_success() {
            tracing::info!(code = %request.campaign_code, status = response.status, "Voucher redeemed");
            Ok(response.body)
        } else {
            let err = RedeemError::upstream(response.status, response.body);
            tracing::warn!(
                code = %request.campaign_code,
                status = response.status,
                upstream_code = ?err.upstream_code().map(|c| c.to_string()),
                "Upstream rejected redemption"
            );
            Err(err)
        }
    }

    /// Extracts the campaign code without contacting the upstream.
    ///
    /// # Errors
    ///
    /// [`RedeemError::Validation`] for an empty link, [`RedeemError::Extraction`]
    /// when nothing matches.
    pub fn extract(
        &self,
        campaign_link: &str,
    ) -> Result<(CampaignCode, ExtractionStrategy), RedeemError> {
        if campaign_link.is_empty() {
            return Err(RedeemError::Validation {
                fields: vec!["campaign_link"],
            });
        }

        extract_with_strategy(campaign_link).ok_or(RedeemError::Extraction)
    }

    /// Base URL of the upstream service this instance redeems against.
    pub fn upstream_base_url(&self) -> String {
        self.gateway.base_url()
    }
}
