//! JSON serialization for sample reports.

use super::SampleReport;

/// Serialize a SampleReport to a compact JSON string.
///
/// # Errors
///
/// Propagates `serde_json` errors. A report holds only a string, a pair of
/// integers and an integer list, none of which can fail to encode.
pub fn to_json(report: &SampleReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a SampleReport to a pretty-printed JSON string.
///
/// # Errors
///
/// Same as [`to_json`]; only the whitespace differs.
pub fn to_json_pretty(report: &SampleReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Parse a SampleReport back from JSON.
///
/// # Errors
///
/// Returns an error if `json` is malformed, the period denominator is zero,
/// or the samples are not in ascending order.
pub fn from_json(json: &str) -> Result<SampleReport, serde_json::Error> {
    serde_json::from_str(json)
}
