//! Knack Calendar - Date arithmetic, differences, formatting and parsing.
//!
//! Dates are [`chrono::NaiveDateTime`] values; there is no time zone
//! handling. Every operation returns a new value and leaves its inputs alone.
//!
//! # Features
//!
//! - Signed day/week/month/year offsets with a selectable month overflow rule
//! - Differences in whole days/weeks (unsigned) and months/years (signed)
//! - Formatting through the fixed [`DateTemplate`] set or a free-form pattern
//! - Lenient parsing of the common ISO, US and abbreviated-month layouts
//!
//! # Example
//!
//! ```rust
//! use knack_calendar::{add, date, difference, format, DateTemplate, DateUnit};
//!
//! # fn main() -> knack_core::Result<()> {
//! let start = date(2024, 1, 31)?;
//! let next = add(start, DateUnit::Month, 1)?;
//! assert_eq!(format(next, DateTemplate::IsoDash), "2024-02-29");
//! assert_eq!(difference(next, start, DateUnit::Day), 29);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod arithmetic;
pub mod format;
pub mod parse;

// Re-export commonly used types
pub use arithmetic::{add, add_with, difference, DateOffset};
pub use chrono::NaiveDateTime;
pub use format::{format, format_pattern, format_with};
pub use knack_core::{DateTemplate, DateUnit, MonthOverflow, TemplateScan};
pub use parse::{date, parse};
