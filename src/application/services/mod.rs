//! Business logic services for the application layer.

pub mod redemption_service;

pub use redemption_service::RedemptionService;
