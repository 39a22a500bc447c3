//! Timestamp helpers for the NASA data formats.
//!
//! Close-approach times arrive as calendar dates like
//! `"2020-Jan-01 12:30"`; output uses the plainer `"2020-01-01 12:30"`.

use chrono::NaiveDateTime;

/// Input format of the CAD `cd` field.
pub const CD_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Output format for serialized timestamps.
pub const OUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a NASA calendar date (`"2020-Jan-01 12:30"`).
///
/// # Errors
/// Returns the underlying chrono error when the string does not match
/// [`CD_FORMAT`].
pub fn parse_cd(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s.trim(), CD_FORMAT)
}

/// Format a timestamp for output (`"2020-01-01 12:30"`).
#[must_use]
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(OUT_FORMAT).to_string()
}
