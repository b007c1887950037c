//! Canonical color value and the input shapes the parser accepts.

use knack_core::KnackError;
use serde::{Deserialize, Serialize};

/// Canonical 8-bit RGB color with optional alpha.
///
/// `alpha` is `None` when the color was built without an alpha channel.
/// Such a color still reports an opacity of `1.0` through [`Color::alpha`],
/// but cannot be rendered as `rgba(...)`.
///
/// Deserialized colors go through the same channel and alpha checks as
/// structured parsing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorFields")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Explicit alpha in [0, 1], if one was given
    #[serde(rename = "a", default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl Color {
    /// Color without an explicit alpha channel.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    /// Color with an explicit alpha channel.
    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(a),
        }
    }

    /// Effective opacity; `1.0` when alpha was never given.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha.unwrap_or(1.0)
    }

    /// Whether alpha was supplied rather than defaulted.
    #[must_use]
    pub fn has_explicit_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Copy of this color with an explicit alpha.
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            alpha: Some(a),
            ..self
        }
    }
}

#[derive(Deserialize)]
struct ColorFields {
    r: f64,
    g: f64,
    b: f64,
    #[serde(default)]
    a: Option<f64>,
}

impl TryFrom<ColorFields> for Color {
    type Error = KnackError;

    fn try_from(fields: ColorFields) -> Result<Self, Self::Error> {
        crate::parse::parse_components(fields.r, fields.g, fields.b, fields.a)
    }
}

/// The shapes a color can be given in.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// `#RRGGBB`, `rgb(r, g, b)` or `rgba(r, g, b, a)`
    Text(String),
    /// Structured numeric components; `a` is `None` when the field is absent
    Components {
        /// Red
        r: f64,
        /// Green
        g: f64,
        /// Blue
        b: f64,
        /// Alpha, if present
        a: Option<f64>,
    },
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Color> for ColorInput {
    fn from(color: Color) -> Self {
        Self::Components {
            r: f64::from(color.r),
            g: f64::from(color.g),
            b: f64::from(color.b),
            a: color.alpha,
        }
    }
}
