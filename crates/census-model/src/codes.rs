//! Code ordering and label lookup helpers.

use std::cmp::Ordering;

use crate::dictionary::CodeMap;

/// Resolve the descriptive label for a code.
///
/// Codes absent from the map get a synthetic `Code {code}` label rather than
/// failing; unmapped codes stay visible in downstream tables and charts.
pub fn label_for(codes: &CodeMap, code: &str) -> String {
    codes
        .get(code)
        .cloned()
        .unwrap_or_else(|| format!("Code {code}"))
}

/// Order codes numerically when both parse as numbers, lexicographically
/// otherwise. Keeps `"10"` after `"2"` for numeric code sets.
pub fn compare_codes(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(left), Ok(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}
