//! Locality trend summary.
//!
//! The trend extraction runs for real, but its structured payload is not
//! consumed yet: the summary is a fixed placeholder until the trend-report
//! format is settled (see DESIGN.md). Downstream consumers must not treat
//! the returned text as extracted data.

use crate::client::ExtractResponse;

/// Fixed text returned for every trend request.
pub const TREND_PLACEHOLDER: &str = "Sample location trend analysis (mocked for now).";

/// Summarize the trend envelope.
///
/// The payload is deliberately ignored, whatever it contains.
pub fn summarize_trends(_response: &ExtractResponse) -> String {
    TREND_PLACEHOLDER.to_string()
}
