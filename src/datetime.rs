//! Flexible timestamp parsing for `date-time` fields.
//!
//! [`parse_flexible_datetime`] accepts the date and time spellings commonly
//! found in exported models (RFC 3339, RFC 2822, ISO 8601 with a space or a
//! `T`, slashed and dotted dates, month names, compact forms) and returns the
//! wall-clock time it describes. A UTC offset, when present, is kept as given
//! rather than converted. Inputs carrying only a date resolve to midnight, and
//! an hour without minutes (`2023-01-05T10`, `+02`) reads as a whole hour.
//!
//! [`format_timestamp`] produces the fixed `YYYY-MM-DD HH:MM:SS` form used in
//! reports.
//!
//! ```rust
//! use content_report::{format_timestamp, parse_flexible_datetime};
//!
//! let ts = parse_flexible_datetime("2023-01-05T10:00:00+02:00").unwrap();
//! assert_eq!(format_timestamp(&ts), "2023-01-05 10:00:00");
//!
//! let ts = parse_flexible_datetime("January 5, 2023").unwrap();
//! assert_eq!(format_timestamp(&ts), "2023-01-05 00:00:00");
//! ```

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Output pattern for formatted timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S%.f",
    "%d.%m.%Y %H:%M",
    "%Y%m%dT%H%M%S",
    "%B %d, %Y %H:%M:%S",
    "%B %d %Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
    "%b %d %Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%d %b %Y %H:%M",
    "%a %b %e %H:%M:%S %Y",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%Y%m%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parses a timestamp written in any of the supported spellings.
///
/// # Errors
///
/// Returns [`Error::DateFormat`] (with an empty field name) when no spelling
/// matches. Callers that know the field should re-raise with its name.
pub fn parse_flexible_datetime(input: &str) -> Result<NaiveDateTime> {
    let text = input.trim();
    if text.is_empty() {
        return Err(Error::date_format("", input));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Ok(dt.naive_local());
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, fmt) {
            return Ok(dt.naive_local());
        }
    }

    // "Z" and "UTC" suffixes carry no shift, so the remaining text is already wall-clock time.
    let naive_text = text
        .strip_suffix('Z')
        .or_else(|| text.strip_suffix(" UTC"))
        .or_else(|| text.strip_suffix(" GMT"))
        .unwrap_or(text);

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive_text, fmt) {
            return Ok(dt);
        }
    }
    if let Some(padded) = pad_hour_only(naive_text) {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&padded, "%Y-%m-%dT%H:%M") {
            return Ok(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(naive_text, fmt) {
            if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                return Ok(dt);
            }
        }
    }

    Err(Error::date_format("", input))
}

/// Rewrites `2023-01-05T10` or `2023-01-05 10` as `2023-01-05T10:00`.
///
/// chrono has no pattern for an hour without minutes.
fn pad_hour_only(text: &str) -> Option<String> {
    let (date, hour) = text.rsplit_once(['T', ' '])?;
    let is_hour = !hour.is_empty() && hour.len() <= 2 && hour.bytes().all(|b| b.is_ascii_digit());
    is_hour.then(|| format!("{date}T{hour}:00"))
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
