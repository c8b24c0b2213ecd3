//! Application layer services implementing business logic.
//!
//! Services coordinate domain operations and gateway calls, and provide a
//! clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::redemption_service::RedemptionService`] - Code extraction and voucher redemption

pub mod services;
