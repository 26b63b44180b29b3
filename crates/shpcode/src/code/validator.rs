//! Tracking code validation.

use std::sync::LazyLock;

use regex::Regex;

// `\d` would also accept non-ASCII Unicode digits.
static RE_TRACKING_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^BR[0-9]{12}[FTM]$").unwrap());

/// Returns true iff `code` is exactly `BR`, twelve ASCII digits and one of
/// `F`, `T`, `M`. Case-sensitive; no trimming.
pub fn is_valid_code(code: &str) -> bool {
    RE_TRACKING_CODE.is_match(code)
}

/// Turns operator search input into the canonical form codes are stored in:
/// surrounding whitespace removed, letters upper-cased.
pub fn normalize_query(input: &str) -> String {
    input.trim().to_uppercase()
}
