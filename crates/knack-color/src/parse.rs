//! Color parsing.
//!
//! Accepted text forms:
//! * `#RRGGBB` (exactly six hex digits, either case)
//! * `rgb(r, g, b)`
//! * `rgba(r, g, b)` / `rgb(r, g, b, a)` / `rgba(r, g, b, a)` with `a` in [0, 1]
//!
//! Text colors always carry an explicit alpha (`1.0` when none is written).
//! Structured colors keep alpha absent unless the `a` field is present.

use crate::model::{Color, ColorInput};
use knack_core::{KnackError, Result};
use regex::Regex;
use serde_json::Value;
use std::str::FromStr;
use std::sync::OnceLock;

/// Parse any supported color input into the canonical form.
pub fn parse(input: &ColorInput) -> Result<Color> {
    match input {
        ColorInput::Text(text) => parse_text(text),
        ColorInput::Components { r, g, b, a } => parse_components(*r, *g, *b, *a),
    }
}

/// Parse a hex or functional color string.
pub fn parse_text(text: &str) -> Result<Color> {
    if let Some(digits) = text.strip_prefix('#') {
        tracing::trace!("Parsing '{}' as hex color", text);
        parse_hex(digits)
    } else {
        tracing::trace!("Parsing '{}' as functional color", text);
        parse_functional(text)
    }
}

/// Parse a dynamically typed color: a string, or an object with numeric
/// `r`, `g`, `b` and optional `a` fields.
pub fn parse_value(value: &Value) -> Result<Color> {
    match value {
        Value::String(text) => parse_text(text),
        Value::Object(fields) => {
            let channel = |name: &str| -> Result<f64> {
                fields.get(name).and_then(Value::as_f64).ok_or_else(|| {
                    KnackError::TypeMismatch(format!(
                        "color field '{name}' must be a number, got {}",
                        describe(fields.get(name))
                    ))
                })
            };

            let r = channel("r")?;
            let g = channel("g")?;
            let b = channel("b")?;
            let a = if fields.contains_key("a") {
                Some(channel("a")?)
            } else {
                None
            };

            parse_components(r, g, b, a)
        }
        other => Err(KnackError::TypeMismatch(format!(
            "expected a color string or object, got {}",
            describe(Some(other))
        ))),
    }
}

fn parse_hex(digits: &str) -> Result<Color> {
    static HEX_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = HEX_REGEX.get_or_init(|| Regex::new(r"^[0-9A-Fa-f]{6}$").expect("valid regex"));

    if !regex.is_match(digits) {
        return Err(KnackError::InvalidFormat(format!(
            "'#{digits}' is not a #RRGGBB hex color"
        )));
    }

    let pair = |at: usize| -> Result<u8> {
        u8::from_str_radix(&digits[at..at + 2], 16)
            .map_err(|e| KnackError::InvalidFormat(format!("bad hex digits in '#{digits}': {e}")))
    };

    Ok(Color::rgba(pair(0)?, pair(2)?, pair(4)?, 1.0))
}

fn parse_functional(text: &str) -> Result<Color> {
    static FUNC_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = FUNC_REGEX.get_or_init(|| {
        Regex::new(r"^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*([\d.]+)\s*)?\)$")
            .expect("valid regex")
    });

    let caps = regex.captures(text).ok_or_else(|| {
        KnackError::InvalidFormat(format!("'{text}' is not a hex, rgb() or rgba() color"))
    })?;

    let channel = |idx: usize, name: &str| -> Result<u8> {
        let digits = &caps[idx];
        digits.parse::<u8>().map_err(|_| {
            KnackError::ChannelOutOfRange(format!("{name} = {digits} in '{text}' exceeds 255"))
        })
    };

    let r = channel(1, "r")?;
    let g = channel(2, "g")?;
    let b = channel(3, "b")?;

    let a = match caps.get(4) {
        Some(m) => {
            let a = m.as_str().parse::<f64>().map_err(|_| {
                KnackError::InvalidFormat(format!("alpha '{}' in '{text}' is not a number", m.as_str()))
            })?;
            check_alpha(a)?
        }
        None => 1.0,
    };

    Ok(Color::rgba(r, g, b, a))
}

pub(crate) fn parse_components(r: f64, g: f64, b: f64, a: Option<f64>) -> Result<Color> {
    let color = Color {
        r: channel_from_f64("r", r)?,
        g: channel_from_f64("g", g)?,
        b: channel_from_f64("b", b)?,
        alpha: a.map(check_alpha).transpose()?,
    };
    Ok(color)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_from_f64(name: &str, value: f64) -> Result<u8> {
    if value.fract() == 0.0 && (0.0..=255.0).contains(&value) {
        Ok(value as u8)
    } else {
        Err(KnackError::ChannelOutOfRange(format!(
            "{name} = {value} is not an integer in 0-255"
        )))
    }
}

fn check_alpha(a: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&a) {
        // -0.0 would render as "-0", which the functional grammar rejects
        Ok(a.abs())
    } else {
        Err(KnackError::InvalidAlpha(format!("{a} is outside [0, 1]")))
    }
}

fn describe(value: Option<&Value>) -> &'static str {
    match value {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(_)) => "a number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "an array",
        Some(Value::Object(_)) => "an object",
    }
}

impl FromStr for Color {
    type Err = KnackError;

    fn from_str(s: &str) -> Result<Self> {
        parse_text(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = KnackError;

    fn try_from(value: &str) -> Result<Self> {
        parse_text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knack_core::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_parse_hex() {
        let color = parse_text("#ff0000").expect("valid hex");
        assert_eq!(color, Color::rgba(255, 0, 0, 1.0));

        let color = parse_text("#0A141e").expect("mixed case hex");
        assert_eq!(color, Color::rgba(10, 20, 30, 1.0));
    }

    #[test]
    fn test_parse_hex_invalid() {
        let invalid = vec!["#fff", "#ff00000", "#gg0000", "##ff0000", "#ff 000", "#"];

        for text in invalid {
            let err = parse_text(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "Should fail for: {text}");
        }
    }

    #[test]
    fn test_parse_functional() {
        assert_eq!(
            parse_text("rgba(10, 20, 30, 0.5)").expect("rgba"),
            Color::rgba(10, 20, 30, 0.5)
        );
        assert_eq!(
            parse_text("rgb(1,2,3)").expect("rgb"),
            Color::rgba(1, 2, 3, 1.0)
        );
        assert_eq!(
            parse_text("rgb( 4 , 5 , 6 , 1 )").expect("rgb with alpha"),
            Color::rgba(4, 5, 6, 1.0)
        );
        assert_eq!(
            parse_text("rgba(7, 8, 9)").expect("rgba without alpha"),
            Color::rgba(7, 8, 9, 1.0)
        );
    }

    #[test]
    fn test_parse_functional_invalid() {
        let invalid = vec![
            "ff0000",
            "rgb(1, 2)",
            "rgb(-1, 2, 3)",
            "RGB(1, 2, 3)",
            "rgb(1, 2, 3",
            " rgb(1, 2, 3)",
            "hsl(1, 2, 3)",
            "rgba(1, 2, 3, 0.5.1)",
        ];

        for text in invalid {
            let err = parse_text(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "Should fail for: {text}");
        }
    }

    #[test]
    fn test_parse_functional_alpha_out_of_range() {
        let err = parse_text("rgba(1, 2, 3, 1.5)").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAlpha);
    }

    #[test]
    fn test_parse_functional_channel_out_of_range() {
        let err = parse_text("rgb(256, 0, 0)").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChannelOutOfRange);
    }

    #[test]
    fn test_parse_components() {
        let input = ColorInput::Components {
            r: 1.0,
            g: 2.0,
            b: 3.0,
            a: None,
        };
        let color = parse(&input).expect("components");
        assert_eq!(color, Color::rgb(1, 2, 3));
        assert!(!color.has_explicit_alpha());

        let input = ColorInput::Components {
            r: 1.0,
            g: 2.0,
            b: 3.5,
            a: None,
        };
        assert_eq!(parse(&input).unwrap_err().kind(), ErrorKind::ChannelOutOfRange);

        let input = ColorInput::Components {
            r: 1.0,
            g: 2.0,
            b: 3.0,
            a: Some(1.5),
        };
        assert_eq!(parse(&input).unwrap_err().kind(), ErrorKind::InvalidAlpha);
    }

    #[test]
    fn test_parse_value_alpha_out_of_range() {
        let invalid = vec![
            json!({"r": 1, "g": 2, "b": 3, "a": -0.1}),
            json!({"r": 1, "g": 2, "b": 3, "a": 1.5}),
        ];

        for value in invalid {
            let err = parse_value(&value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidAlpha, "Should fail for: {value}");
        }
    }

    #[test]
    fn test_negative_zero_alpha_round_trips() {
        let color = parse_value(&json!({"r": 1, "g": 2, "b": 3, "a": -0.0})).expect("object");
        let rendered = crate::format(&color, knack_core::ColorFormat::Rgba).expect("rgba");
        assert_eq!(rendered, "rgba(1, 2, 3, 0)");
        assert_eq!(parse_text(&rendered).expect("reparse"), color);
    }

    #[test]
    fn test_parse_value_object() {
        let color = parse_value(&json!({"r": 10, "g": 20, "b": 30, "a": 0.25})).expect("object");
        assert_eq!(color, Color::rgba(10, 20, 30, 0.25));

        let color = parse_value(&json!({"r": 10, "g": 20, "b": 30})).expect("object");
        assert_eq!(color.alpha, None);
    }

    #[test]
    fn test_parse_value_type_mismatch() {
        let invalid = vec![
            json!(null),
            json!(42),
            json!(true),
            json!([255, 0, 0]),
            json!({"r": "255", "g": 0, "b": 0}),
            json!({"g": 0, "b": 0}),
            json!({"r": 0, "g": 0, "b": 0, "a": null}),
            json!({"r": 0, "g": 0, "b": 0, "a": "1"}),
        ];

        for value in invalid {
            let err = parse_value(&value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch, "Should fail for: {value}");
        }
    }

    #[test]
    fn test_parse_value_string() {
        let color = parse_value(&json!("#00ff00")).expect("string value");
        assert_eq!(color, Color::rgba(0, 255, 0, 1.0));
    }

    #[test]
    fn test_from_str() {
        let color: Color = "rgb(9, 9, 9)".parse().expect("from_str");
        assert_eq!(color, Color::rgba(9, 9, 9, 1.0));
        assert!(Color::try_from("nope").is_err());
    }
}
