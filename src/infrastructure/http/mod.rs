//! Outbound HTTP integrations.

mod voucher_gateway;

pub use voucher_gateway::HttpVoucherGateway;
