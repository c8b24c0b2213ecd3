//! Core domain entities of the redemption flow.
//!
//! # Entity Types
//!
//! - [`CampaignCode`] - Voucher identifier extracted from a campaign link
//! - [`RedemptionRequest`] - Mobile number plus code, ready for the upstream call
//!
//! Entities are plain data; extraction lives in
//! [`crate::utils::code_extractor`] and orchestration in
//! [`crate::application::services::RedemptionService`].

pub mod campaign_code;
pub mod redemption;

pub use campaign_code::CampaignCode;
pub use redemption::{RedemptionRequest, UpstreamRedeemBody, mask_mobile};
