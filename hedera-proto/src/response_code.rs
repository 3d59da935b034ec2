//! The closed response-code enumeration: mapped one way, integer to
//! label, and classified into success/unknown/failed.

/// Diagnostic-only classification of a response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    Success,
    Unknown,
    Failed,
}

/// Returns the diagnostic label for `code`, or `None` if it isn't in the
/// closed table. Labels are used only for diagnostics, never for control
/// flow — use [`classify`] or [`is_precheck_success`] for that.
pub fn response_code_label(code: i32) -> Option<&'static str> {
    Some(match code {
        0 => "OK",
        1 => "INVALID_TRANSACTION",
        2 => "PAYER_ACCOUNT_NOT_FOUND",
        3 => "INVALID_NODE_ACCOUNT",
        4 => "TRANSACTION_EXPIRED",
        5 => "INVALID_TRANSACTION_START",
        6 => "INVALID_TRANSACTION_DURATION",
        7 => "BUSY",
        8 => "INVALID_SIGNATURE",
        9 => "MEMO_TOO_LONG",
        10 => "INSUFFICIENT_TX_FEE",
        11 => "INSUFFICIENT_PAYER_BALANCE",
        12 => "DUPLICATE_TRANSACTION",
        13 => "NOT_SUPPORTED",
        14 => "INVALID_FILE_ID",
        15 => "INVALID_ACCOUNT_ID",
        16 => "INVALID_CONTRACT_ID",
        17 => "INVALID_TRANSACTION_ID",
        18 => "RECEIPT_NOT_FOUND",
        19 => "RECORD_NOT_FOUND",
        20 => "INVALID_SOLIDITY_ID",
        21 => "UNKNOWN",
        22 => "SUCCESS",
        23 => "FAIL_INVALID",
        24 => "FAIL_FEE",
        25 => "FAIL_BALANCE",
        26 => "INVALID_SCHEDULE_ID",
        27 => "SCHEDULE_IS_IMMUTABLE",
        28 => "SCHEDULE_ALREADY_DELETED",
        29 => "SCHEDULE_ALREADY_EXECUTED",
        30 => "SCHEDULE_PENDING_EXPIRATION",
        _ => return None,
    })
}

/// Classifies `code`: success is exactly `{0, 22}`, unknown is exactly
/// `{21}`, everything else is failed.
pub fn classify(code: i32) -> ResponseClass {
    match code {
        0 | 22 => ResponseClass::Success,
        21 => ResponseClass::Unknown,
        _ => ResponseClass::Failed,
    }
}

/// True iff `code` is a successful precheck (`0` or `22`).
pub fn is_precheck_success(code: i32) -> bool {
    matches!(classify(code), ResponseClass::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels() {
        assert_eq!(response_code_label(0), Some("OK"));
        assert_eq!(response_code_label(22), Some("SUCCESS"));
        assert_eq!(response_code_label(999), None);
    }

    #[test]
    fn precheck_success_exactly_ok_and_success() {
        assert!(is_precheck_success(0));
        assert!(is_precheck_success(22));
        assert!(!is_precheck_success(21));
        assert!(!is_precheck_success(7));
        assert!(!is_precheck_success(999));
    }

    #[test]
    fn classification_buckets() {
        assert_eq!(classify(0), ResponseClass::Success);
        assert_eq!(classify(21), ResponseClass::Unknown);
        assert_eq!(classify(7), ResponseClass::Failed);
        assert_eq!(classify(999), ResponseClass::Failed);
    }
}
