//! Date parsing and construction.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use knack_core::{KnackError, Result};

const DATETIME_LAYOUTS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

// Slashed numeric dates are read month first.
const DATE_LAYOUTS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%d-%b-%Y",
    "%d/%b/%Y",
];

/// Parse a date from text.
///
/// RFC 3339 timestamps are converted to UTC wall time. Date-only inputs
/// resolve to midnight.
pub fn parse(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        tracing::trace!("Parsed '{}' as RFC 3339", text);
        return Ok(dt.naive_utc());
    }

    for layout in DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, layout) {
            tracing::trace!("Parsed '{}' with layout {}", text, layout);
            return Ok(dt);
        }
    }

    for layout in DATE_LAYOUTS {
        if let Ok(d) = NaiveDate::parse_from_str(text, layout) {
            tracing::trace!("Parsed '{}' with layout {}", text, layout);
            return midnight(d);
        }
    }

    Err(KnackError::InvalidDateString(format!(
        "'{text}' is not a recognized date"
    )))
}

/// Midnight on the given calendar day.
///
/// Fails with `InvalidDate` for days that do not exist, such as
/// February 30th or month 13.
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDateTime> {
    let d = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        KnackError::InvalidDate(format!("{year:04}-{month:02}-{day:02} is not a calendar date"))
    })?;
    midnight(d)
}

fn midnight(d: NaiveDate) -> Result<NaiveDateTime> {
    d.and_hms_opt(0, 0, 0)
        .ok_or_else(|| KnackError::InvalidDate(format!("{d} has no midnight")))
}
