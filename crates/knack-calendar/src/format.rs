//! Date formatting through templates.
//!
//! Recognized tokens, matched longest first from left to right:
//!
//! | token          | output                         |
//! |----------------|--------------------------------|
//! | `yyyy`, `YYYY` | four-digit year                |
//! | `MMM`          | English month abbreviation     |
//! | `MM`           | two-digit month                |
//! | `dd`, `DD`     | two-digit day of month         |
//! | `HH`, `hh`     | two-digit hour (24h)           |
//! | `mm`           | two-digit minute               |
//! | `ss`           | two-digit second               |
//!
//! Any other character is copied as is. [`TemplateScan::Literal`] disables
//! token recognition and copies the whole template through.

use chrono::{Datelike, NaiveDateTime, Timelike};
use knack_core::{DateTemplate, TemplateScan};

#[derive(Debug, Clone, Copy)]
enum Field {
    Year,
    MonthAbbrev,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

// Ordered so that longer tokens win over their prefixes.
const TOKENS: [(&str, Field); 10] = [
    ("yyyy", Field::Year),
    ("YYYY", Field::Year),
    ("MMM", Field::MonthAbbrev),
    ("MM", Field::Month),
    ("dd", Field::Day),
    ("DD", Field::Day),
    ("HH", Field::Hour),
    ("hh", Field::Hour),
    ("mm", Field::Minute),
    ("ss", Field::Second),
];

/// Format `date` with one of the fixed templates.
#[must_use]
pub fn format(date: NaiveDateTime, template: DateTemplate) -> String {
    format_with(date, template, TemplateScan::Tokens)
}

/// Format `date` with one of the fixed templates and an explicit scan mode.
#[must_use]
pub fn format_with(date: NaiveDateTime, template: DateTemplate, scan: TemplateScan) -> String {
    format_pattern(date, template.pattern(), scan)
}

/// Format `date` with a free-form pattern.
#[must_use]
pub fn format_pattern(date: NaiveDateTime, pattern: &str, scan: TemplateScan) -> String {
    if scan == TemplateScan::Literal {
        return pattern.to_string();
    }

    let mut out = String::with_capacity(pattern.len() + 4);
    let mut rest = pattern;

    while !rest.is_empty() {
        if let Some((token, field)) = TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            render(date, *field, &mut out);
            rest = &rest[token.len()..];
        } else {
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                out.push(ch);
            }
            rest = chars.as_str();
        }
    }

    out
}

fn render(date: NaiveDateTime, field: Field, out: &mut String) {
    let text = match field {
        Field::Year => format!("{:04}", date.year()),
        Field::MonthAbbrev => date.format("%b").to_string(),
        Field::Month => format!("{:02}", date.month()),
        Field::Day => format!("{:02}", date.day()),
        Field::Hour => format!("{:02}", date.hour()),
        Field::Minute => format!("{:02}", date.minute()),
        Field::Second => format!("{:02}", date.second()),
    };
    out.push_str(&text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 3))
            .expect("valid datetime")
    }

    #[test]
    fn test_format_every_template() {
        let expected = [
            (DateTemplate::IsoDash, "2024-03-07"),
            (DateTemplate::UsSlash, "03/07/2024"),
            (DateTemplate::EuDot, "07.03.2024"),
            (DateTemplate::UsDash, "03-07-2024"),
            (DateTemplate::IsoSlash, "2024/03/07"),
            (DateTemplate::EuSlash, "07/03/2024"),
            (DateTemplate::IsoDot, "2024.03.07"),
            (DateTemplate::AbbrevDash, "07-Mar-2024"),
            (DateTemplate::AbbrevSlash, "07/Mar/2024"),
        ];

        for (template, output) in expected {
            assert_eq!(format(sample(), template), output, "Failed for: {template}");
        }
    }

    #[test]
    fn test_format_literal_scan_copies_template() {
        for template in DateTemplate::ALL {
            assert_eq!(
                format_with(sample(), template, TemplateScan::Literal),
                template.pattern()
            );
        }
    }

    #[test]
    fn test_format_pattern_time_tokens() {
        let text = format_pattern(sample(), "YYYY-MM-DD hh:mm:ss", TemplateScan::Tokens);
        assert_eq!(text, "2024-03-07 09:05:03");

        let text = format_pattern(sample(), "HH.mm (dd MMM)", TemplateScan::Tokens);
        assert_eq!(text, "09.05 (07 Mar)");
    }

    #[test]
    fn test_format_pattern_leftover_characters() {
        // A lone `M`, `y` or `d` is not a token
        let text = format_pattern(sample(), "M y d yyy é", TemplateScan::Tokens);
        assert_eq!(text, "M y d yyy é");

        // Five `M`s: `MMM` then `MM`
        let text = format_pattern(sample(), "MMMMM", TemplateScan::Tokens);
        assert_eq!(text, "Mar03");
    }

    #[test]
    fn test_format_is_deterministic() {
        let first = format(sample(), DateTemplate::AbbrevSlash);
        for _ in 0..3 {
            assert_eq!(format(sample(), DateTemplate::AbbrevSlash), first);
        }
    }
}
