//! DTOs for the extraction diagnostics endpoint.

use crate::utils::code_extractor::ExtractionStrategy;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::field::{TextField, required};

#[derive(Debug, Deserialize, Validate)]
pub struct ExtractRequest {
    #[serde(default)]
    #[validate(custom(function = "required"))]
    pub campaign_link: TextField,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub campaign_code: String,
    /// Strategy that produced the code.
    pub strategy: ExtractionStrategy,
}
