//! Campaign code entity extracted from a caller-supplied campaign link.

use std::fmt;

/// Opaque voucher identifier addressed on the upstream service.
///
/// Always non-empty. Codes are only ever produced by
/// [`crate::utils::code_extractor::extract_campaign_code`]; nothing in the
/// service generates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CampaignCode(String);

impl CampaignCode {
    /// Wraps a raw code, rejecting empty and whitespace-only values.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encodes the code for embedding into a URL path segment.
    pub fn url_encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CampaignCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CampaignCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
