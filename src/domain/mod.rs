//! Domain layer: redemption entities, failure taxonomy and gateway contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Campaign code and redemption request
//! - [`gateways`] - Upstream voucher service trait
//! - [`redeem_error`] - Failure variants of a redemption attempt
//! - [`upstream_error_code`] - Known upstream codes and their messages
//!
//! The domain layer has no dependency on HTTP frameworks or clients; the
//! concrete gateway lives in [`crate::infrastructure`].

pub mod entities;
pub mod gateways;
pub mod redeem_error;
pub mod upstream_error_code;

pub use redeem_error::RedeemError;
pub use upstream_error_code::UpstreamErrorCode;
