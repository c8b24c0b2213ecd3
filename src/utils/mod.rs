//! Utility functions for campaign link processing.
//!
//! - [`code_extractor`] - Campaign code extraction from links in several formats

pub mod code_extractor;
