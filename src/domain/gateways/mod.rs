//! Gateway trait definitions for outbound integrations.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure`. Mocks are generated via `mockall` for tests.

pub mod voucher_gateway;

pub use voucher_gateway::{GatewayError, UpstreamResponse, VoucherGateway};

#[cfg(test)]
pub use voucher_gateway::MockVoucherGateway;
