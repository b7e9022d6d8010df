//! Approach-time conversions.
//!
//! The source approach table stores calendar dates like
//! `2020-Jan-01 12:00` (UTC, minute precision, no seconds).

use chrono::{DateTime, NaiveDateTime, Utc};

/// Calendar format used by the source files, e.g. `2020-Jan-01 12:00`.
const SOURCE_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Display format, e.g. `2020-01-01 12:00`. Minute precision only; the
/// source data has no seconds to show.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a source calendar string into a UTC timestamp.
pub fn parse_approach_time(value: &str) -> Result<DateTime<Utc>, chrono::format::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), SOURCE_FORMAT).map(|naive| naive.and_utc())
}

/// Format a UTC timestamp at minute precision.
pub fn format_approach_time(time: DateTime<Utc>) -> String {
    time.format(DISPLAY_FORMAT).to_string()
}
