//! Campaign code extraction from caller-supplied campaign links.
//!
//! Links arrive in several historical formats:
//!
//! - `https://gift.truemoney.com/campaign/?v=CODE`
//! - `https://gift.truemoney.com/campaign/vouchers/CODE`
//! - `https://gift.truemoney.com/campaign/vouchers/CODE/redeem`
//! - bare fragments such as `vouchers/CODE` or `?v=CODE`
//!
//! [`extract_campaign_code`] runs an ordered list of strategies and returns
//! the first non-empty result. Strategies on the parsed URL come first; the
//! raw-string ones only run when parsing fails or yields nothing.

use crate::domain::entities::CampaignCode;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::sync::LazyLock;
use url::Url;

/// `?v=CODE` or `&v=CODE`, value ends at `&`, `/` or whitespace.
static RAW_QUERY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[?&]v=([^&/\s]+)").unwrap());

/// `vouchers/CODE`, value ends at `/` or whitespace.
static RAW_VOUCHERS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)vouchers/([^/\s]+)").unwrap());

/// Path words that are never codes. `compaign` is a misspelling seen in live links.
const RESERVED_SEGMENTS: &[&str] = &["redeem", "vouchers", "campaign", "compaign"];

/// Literal fragments removed by the last-resort strategy, in order.
const STRIPPED_FRAGMENTS: &[&str] = &[
    "https://gift.truemoney.com/compaign?v=",
    "https://gift.truemoney.com/campaign?v=",
    "https://gift.truemoney.com/campaign/vouchers/",
    "/redeem",
];

/// Which strategy produced a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    QueryParam,
    VouchersPath,
    TrailingSegment,
    RawQuery,
    RawVouchersPath,
    PrefixStrip,
}

impl ExtractionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QueryParam => "query_param",
            Self::VouchersPath => "vouchers_path",
            Self::TrailingSegment => "trailing_segment",
            Self::RawQuery => "raw_query",
            Self::RawVouchersPath => "raw_vouchers_path",
            Self::PrefixStrip => "prefix_strip",
        }
    }
}

/// Raw link plus its parsed form, when it parses.
struct Candidate<'a> {
    raw: &'a str,
    parsed: Option<Url>,
}

type Strategy = fn(&Candidate<'_>) -> Option<String>;

const STRATEGIES: &[(ExtractionStrategy, Strategy)] = &[
    (ExtractionStrategy::QueryParam, query_param),
    (ExtractionStrategy::VouchersPath, vouchers_path),
    (ExtractionStrategy::TrailingSegment, trailing_segment),
    (ExtractionStrategy::RawQuery, raw_query),
    (ExtractionStrategy::RawVouchersPath, raw_vouchers_path),
    (ExtractionStrategy::PrefixStrip, prefix_strip),
];

/// Extracts the campaign code from a campaign link.
///
/// Returns `None` for empty input or when no strategy yields a non-empty code.
///
/// # Examples
///
/// ```ignore
/// let code = extract_campaign_code("https://gift.truemoney.com/campaign/vouchers/ABC123/redeem");
/// assert_eq!(code.unwrap().as_str(), "ABC123");
/// ```
pub fn extract_campaign_code(link: &str) -> Option<CampaignCode> {
    extract_with_strategy(link).map(|(code, _)| code)
}

/// Same as [`extract_campaign_code`], also reporting the strategy that matched.
pub fn extract_with_strategy(link: &str) -> Option<(CampaignCode, ExtractionStrategy)> {
    if link.is_empty() {
        return None;
    }

    let candidate = Candidate {
        raw: link,
        parsed: Url::parse(link).ok(),
    };

    STRATEGIES.iter().find_map(|(name, strategy)| {
        let code = CampaignCode::new(strategy(&candidate)?)?;
        tracing::debug!(strategy = name.as_str(), code = %code, "Campaign code extracted");
        Some((code, *name))
    })
}

fn query_param(candidate: &Candidate<'_>) -> Option<String> {
    candidate
        .parsed
        .as_ref()?
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Path segments of a parsed link, including opaque URLs such as
/// `code:ABC123` whose path is not split by `Url::path_segments`.
fn path_segments(url: &Url) -> Vec<&str> {
    match url.path_segments() {
        Some(segments) => segments.collect(),
        None => url.path().split('/').collect(),
    }
}

fn vouchers_path(candidate: &Candidate<'_>) -> Option<String> {
    let segments = path_segments(candidate.parsed.as_ref()?);

    segments
        .windows(2)
        .find(|pair| pair[0].eq_ignore_ascii_case("vouchers") && !pair[1].is_empty())
        .map(|pair| decode_segment(pair[1]))
}

fn trailing_segment(candidate: &Candidate<'_>) -> Option<String> {
    let segments = path_segments(candidate.parsed.as_ref()?);
    let last = segments
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .next_back()?;

    let lowered = last.to_ascii_lowercase();
    if RESERVED_SEGMENTS
        .iter()
        .any(|reserved| lowered.contains(reserved))
    {
        return None;
    }

    Some(decode_segment(last))
}

fn raw_query(candidate: &Candidate<'_>) -> Option<String> {
    capture(&RAW_QUERY_REGEX, candidate.raw)
}

fn raw_vouchers_path(candidate: &Candidate<'_>) -> Option<String> {
    capture(&RAW_VOUCHERS_REGEX, candidate.raw)
}

fn prefix_strip(candidate: &Candidate<'_>) -> Option<String> {
    let cleaned = STRIPPED_FRAGMENTS
        .iter()
        .fold(candidate.raw.to_string(), |acc, fragment| {
            acc.replacen(fragment, "", 1)
        });

    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

fn capture(regex: &Regex, haystack: &str) -> Option<String> {
    regex
        .captures(haystack)?
        .get(1)
        .map(|m| m.as_str().to_string())
}

/// Percent-decodes a path segment, keeping it as-is if it is not valid UTF-8.
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| segment.to_string())
}
