//! Calendar arithmetic: offsets and differences.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use knack_core::{DateUnit, KnackError, MonthOverflow, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;

/// A signed quantity of calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateOffset {
    /// Unit of the offset
    pub unit: DateUnit,
    /// Signed number of units
    pub amount: i64,
}

impl DateOffset {
    /// Create an offset.
    #[must_use]
    pub fn new(unit: DateUnit, amount: i64) -> Self {
        Self { unit, amount }
    }
}

/// Parses `"<amount> <unit>"`, e.g. `"3 months"`, `"-2 week"`, `"+1day"`.
///
/// The unit may be plural. A fractional amount fails with `InvalidAmount`,
/// an unknown unit with `InvalidUnit`.
impl FromStr for DateOffset {
    type Err = KnackError;

    fn from_str(s: &str) -> Result<Self> {
        static OFFSET_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = OFFSET_REGEX.get_or_init(|| {
            Regex::new(r"^([+-]?[0-9]+(?:\.[0-9]+)?)\s*([A-Za-z]+)$").expect("valid regex")
        });

        let caps = regex.captures(s.trim()).ok_or_else(|| {
            KnackError::InvalidAmount(format!("'{s}' is not of the form '<amount> <unit>'"))
        })?;

        let amount = parse_amount(&caps[1])?;
        let unit_text = caps[2].to_ascii_lowercase();
        let unit = unit_text
            .strip_suffix('s')
            .unwrap_or(&unit_text)
            .parse::<DateUnit>()?;

        Ok(Self { unit, amount })
    }
}

impl fmt::Display for DateOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn parse_amount(text: &str) -> Result<i64> {
    if let Ok(amount) = text.parse::<i64>() {
        return Ok(amount);
    }

    let value = text
        .parse::<f64>()
        .map_err(|e| KnackError::InvalidAmount(format!("'{text}' is not a number: {e}")))?;

    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Ok(value as i64)
    } else if value.fract() == 0.0 {
        Err(KnackError::InvalidAmount(format!("{text} is too large")))
    } else {
        Err(KnackError::InvalidAmount(format!("{text} is not an integer")))
    }
}

/// Add `amount` units to `date` using the default month overflow rule
/// ([`MonthOverflow::Clamp`]).
pub fn add(date: NaiveDateTime, unit: DateUnit, amount: i64) -> Result<NaiveDateTime> {
    add_with(date, DateOffset::new(unit, amount), MonthOverflow::default())
}

/// Apply `offset` to `date`.
///
/// Day and week offsets move by whole days and keep the time of day. Month
/// and year offsets move the month field (years are twelve months) and
/// resolve a missing day-of-month according to `overflow`.
pub fn add_with(
    date: NaiveDateTime,
    offset: DateOffset,
    overflow: MonthOverflow,
) -> Result<NaiveDateTime> {
    let DateOffset { unit, amount } = offset;
    let scaled = |factor: i64| {
        amount.checked_mul(factor).ok_or_else(|| {
            KnackError::InvalidAmount(format!("{amount} {unit}s overflows the calendar"))
        })
    };

    match unit {
        DateUnit::Day => add_days(date, amount),
        DateUnit::Week => add_days(date, scaled(7)?),
        DateUnit::Month => add_months(date, amount, overflow),
        DateUnit::Year => add_months(date, scaled(12)?, overflow),
    }
}

fn add_days(date: NaiveDateTime, days: i64) -> Result<NaiveDateTime> {
    let delta = Duration::try_days(days)
        .ok_or_else(|| KnackError::InvalidAmount(format!("{days} days overflows the calendar")))?;

    date.checked_add_signed(delta).ok_or_else(|| out_of_range(date, &format!("{days} days")))
}

fn add_months(date: NaiveDateTime, months: i64, overflow: MonthOverflow) -> Result<NaiveDateTime> {
    let total = i64::from(date.year())
        .checked_mul(12)
        .and_then(|m| m.checked_add(i64::from(date.month0())))
        .and_then(|m| m.checked_add(months))
        .ok_or_else(|| out_of_range(date, &format!("{months} months")))?;

    let year = i32::try_from(total.div_euclid(12))
        .map_err(|_| out_of_range(date, &format!("{months} months")))?;
    // rem_euclid(12) is always in 0..12
    let month = u32::try_from(total.rem_euclid(12)).unwrap_or(0) + 1;
    let day = date.day();

    let target = match overflow {
        MonthOverflow::Clamp => {
            let last = days_in_month(year, month)
                .ok_or_else(|| out_of_range(date, &format!("{months} months")))?;
            if day > last {
                tracing::trace!("Clamping day {} to {} in {}-{:02}", day, last, year, month);
            }
            NaiveDate::from_ymd_opt(year, month, day.min(last))
        }
        MonthOverflow::Roll => NaiveDate::from_ymd_opt(year, month, 1).and_then(|first| {
            first.checked_add_signed(Duration::days(i64::from(day) - 1))
        }),
    };

    target
        .map(|d| d.and_time(date.time()))
        .ok_or_else(|| out_of_range(date, &format!("{months} months")))
}

// Stays inside the target month so the last representable month works.
fn days_in_month(year: i32, month: u32) -> Option<u32> {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
}

fn out_of_range(date: NaiveDateTime, what: &str) -> KnackError {
    KnackError::InvalidDate(format!("{date} plus {what} is outside the supported calendar range"))
}

/// Difference between two dates in `unit`.
///
/// Day and week differences are unsigned: the absolute elapsed time,
/// floored to whole units. Month and year differences are signed and
/// compare only the calendar fields, so `difference(a, b, Month)` is
/// negative when `a` falls in an earlier month than `b`.
#[must_use]
pub fn difference(date1: NaiveDateTime, date2: NaiveDateTime, unit: DateUnit) -> i64 {
    let elapsed_ms = (date1 - date2).num_milliseconds().abs();

    match unit {
        DateUnit::Day => elapsed_ms / MS_PER_DAY,
        DateUnit::Week => elapsed_ms / MS_PER_WEEK,
        DateUnit::Month => {
            (i64::from(date1.year()) - i64::from(date2.year())) * 12
                + (i64::from(date1.month()) - i64::from(date2.month()))
        }
        DateUnit::Year => i64::from(date1.year()) - i64::from(date2.year()),
    }
}
