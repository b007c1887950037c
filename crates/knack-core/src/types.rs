//! Shared enums used across the Knack crates.
//!
//! These name the textual tags callers hand in (format names, unit names,
//! template patterns) and the behavioral switches stored in configuration.

use crate::error::{ConfigError, KnackError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Textual color output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)`
    Rgba,
}

impl ColorFormat {
    /// The tag used in configuration and on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
        }
    }
}

impl FromStr for ColorFormat {
    type Err = KnackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            other => Err(KnackError::UnsupportedFormat(format!(
                "unknown color format '{other}', expected hex, rgb or rgba"
            ))),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar units for date arithmetic and differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateUnit {
    /// Calendar day
    Day,
    /// Seven days
    Week,
    /// Calendar month
    Month,
    /// Calendar year
    Year,
}

impl DateUnit {
    /// The lowercase singular tag.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl FromStr for DateUnit {
    type Err = KnackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(KnackError::InvalidUnit(format!(
                "unknown date unit '{other}', expected day, week, month or year"
            ))),
        }
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of date templates accepted by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateTemplate {
    /// `yyyy-MM-dd`
    IsoDash,
    /// `MM/dd/yyyy`
    UsSlash,
    /// `dd.MM.yyyy`
    EuDot,
    /// `MM-dd-yyyy`
    UsDash,
    /// `yyyy/MM/dd`
    IsoSlash,
    /// `dd/MM/yyyy`
    EuSlash,
    /// `yyyy.MM.dd`
    IsoDot,
    /// `dd-MMM-yyyy`
    AbbrevDash,
    /// `dd/MMM/yyyy`
    AbbrevSlash,
}

impl DateTemplate {
    /// Every supported template, in declaration order.
    pub const ALL: [DateTemplate; 9] = [
        Self::IsoDash,
        Self::UsSlash,
        Self::EuDot,
        Self::UsDash,
        Self::IsoSlash,
        Self::EuSlash,
        Self::IsoDot,
        Self::AbbrevDash,
        Self::AbbrevSlash,
    ];

    /// The template's pattern string.
    #[must_use]
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::IsoDash => "yyyy-MM-dd",
            Self::UsSlash => "MM/dd/yyyy",
            Self::EuDot => "dd.MM.yyyy",
            Self::UsDash => "MM-dd-yyyy",
            Self::IsoSlash => "yyyy/MM/dd",
            Self::EuSlash => "dd/MM/yyyy",
            Self::IsoDot => "yyyy.MM.dd",
            Self::AbbrevDash => "dd-MMM-yyyy",
            Self::AbbrevSlash => "dd/MMM/yyyy",
        }
    }
}

impl FromStr for DateTemplate {
    type Err = KnackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|template| template.pattern() == s)
            .ok_or_else(|| KnackError::UnsupportedFormat(format!("unknown date template '{s}'")))
    }
}

impl TryFrom<String> for DateTemplate {
    type Error = KnackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateTemplate> for String {
    fn from(template: DateTemplate) -> Self {
        template.pattern().to_string()
    }
}

impl fmt::Display for DateTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// What to do when month arithmetic lands on a day the target month lacks.
///
/// Jan 31 + 1 month is Feb 29 (2024) under `Clamp` and Mar 2 under `Roll`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthOverflow {
    /// Clamp to the last day of the target month
    #[default]
    Clamp,
    /// Carry the surplus days into the following month
    Roll,
}

impl FromStr for MonthOverflow {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clamp" => Ok(Self::Clamp),
            "roll" => Ok(Self::Roll),
            other => Err(ConfigError::InvalidValue {
                field: "calendar.month_overflow".to_string(),
                reason: format!("expected clamp or roll, got '{other}'"),
            }),
        }
    }
}

/// How date templates are scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateScan {
    /// Replace recognized tokens, longest match first, left to right
    #[default]
    Tokens,
    /// Copy the template through unchanged
    Literal,
}

impl FromStr for TemplateScan {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tokens" => Ok(Self::Tokens),
            "literal" => Ok(Self::Literal),
            other => Err(ConfigError::InvalidValue {
                field: "calendar.template_scanning".to_string(),
                reason: format!("expected tokens or literal, got '{other}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_color_format_tags() {
        for format in [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Rgba] {
            let parsed: ColorFormat = format.as_str().parse().expect("known tag");
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn test_color_format_unknown() {
        let invalid = vec!["hsl", "HEX", "", "rgba "];

        for tag in invalid {
            let err = tag.parse::<ColorFormat>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedFormat, "Should fail for: {tag}");
        }
    }

    #[test]
    fn test_date_unit_unknown() {
        let invalid = vec!["days", "Day", "hour", "fortnight", ""];

        for tag in invalid {
            let err = tag.parse::<DateUnit>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidUnit, "Should fail for: {tag}");
        }
        assert_eq!("week".parse::<DateUnit>().expect("week"), DateUnit::Week);
    }

    #[test]
    fn test_date_template_patterns() {
        for template in DateTemplate::ALL {
            let parsed: DateTemplate = template.pattern().parse().expect("known pattern");
            assert_eq!(parsed, template);
        }

        let err = "YYYY-MM-DD".parse::<DateTemplate>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn test_date_template_serialization() {
        let json = serde_json::to_string(&DateTemplate::AbbrevDash).expect("serialize template");
        assert_eq!(json, "\"dd-MMM-yyyy\"");

        let parsed: DateTemplate = serde_json::from_str("\"dd.MM.yyyy\"").expect("deserialize");
        assert_eq!(parsed, DateTemplate::EuDot);

        assert!(serde_json::from_str::<DateTemplate>("\"yyyy\"").is_err());
    }

    #[test]
    fn test_switch_parsing() {
        assert_eq!("roll".parse::<MonthOverflow>().expect("roll"), MonthOverflow::Roll);
        assert!("wrap".parse::<MonthOverflow>().is_err());
        assert_eq!(
            "literal".parse::<TemplateScan>().expect("literal"),
            TemplateScan::Literal
        );
        assert!(matches!(
            "chars".parse::<TemplateScan>(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
