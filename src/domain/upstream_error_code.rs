//! Known upstream voucher error codes and their user-facing messages.

use std::fmt;

/// Error code reported by the upstream voucher service.
///
/// Unrecognized codes are kept verbatim in [`UpstreamErrorCode::Other`] and
/// fall back to a generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamErrorCode {
    VoucherNotFound,
    VoucherExpired,
    VoucherOutOfStock,
    CannotGetOwnVoucher,
    ConditionNotMet,
    Other(String),
}

impl UpstreamErrorCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "VOUCHER_NOT_FOUND" => Self::VoucherNotFound,
            "VOUCHER_EXPIRED" => Self::VoucherExpired,
            "VOUCHER_OUT_OF_STOCK" => Self::VoucherOutOfStock,
            "CANNOT_GET_OWN_VOUCHER" => Self::CannotGetOwnVoucher,
            "CONDITION_NOT_MET" => Self::ConditionNotMet,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::VoucherNotFound => "VOUCHER_NOT_FOUND",
            Self::VoucherExpired => "VOUCHER_EXPIRED",
            Self::VoucherOutOfStock => "VOUCHER_OUT_OF_STOCK",
            Self::CannotGetOwnVoucher => "CANNOT_GET_OWN_VOUCHER",
            Self::ConditionNotMet => "CONDITION_NOT_MET",
            Self::Other(code) => code,
        }
    }

    /// Localized message shown to the caller.
    ///
    /// `upstream_message` is only used by the fallback arm.
    pub fn user_message(&self, upstream_message: &str) -> String {
        match self {
            Self::VoucherNotFound => "ไม่พบซองของขวัญนี้ หรือลิงก์ไม่ถูกต้อง".to_string(),
            Self::VoucherExpired => "ซองของขวัญนี้หมดอายุแล้ว".to_string(),
            Self::VoucherOutOfStock => "ซองของขวัญนี้ถูกรับครบแล้ว".to_string(),
            Self::CannotGetOwnVoucher => "ไม่สามารถรับซองของขวัญของตัวเองได้".to_string(),
            Self::ConditionNotMet => "ไม่ตรงตามเงื่อนไขการรับซองของขวัญ".to_string(),
            Self::Other(_) => fallback_message(upstream_message),
        }
    }
}

/// Generic message for failures without a known code.
pub fn fallback_message(upstream_message: &str) -> String {
    format!("ไม่สามารถรับซองของขวัญได้: {}", upstream_message)
}

impl fmt::Display for UpstreamErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
