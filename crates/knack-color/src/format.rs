//! Rendering canonical colors as text.

use crate::model::Color;
use knack_core::{ColorConfig, ColorFormat, KnackError, Result};
use std::fmt;

/// Render a color in the requested format.
///
/// `hex` and `rgb` drop alpha. `rgba` requires an explicit alpha and fails
/// with `MissingAlpha` for colors built without one.
pub fn format(color: &Color, target: ColorFormat) -> Result<String> {
    let Color { r, g, b, alpha } = *color;

    match target {
        ColorFormat::Hex => Ok(format!("#{r:02x}{g:02x}{b:02x}")),
        ColorFormat::Rgb => Ok(format!("rgb({r}, {g}, {b})")),
        ColorFormat::Rgba => {
            let a = alpha.ok_or_else(|| {
                KnackError::MissingAlpha(format!(
                    "rgb({r}, {g}, {b}) has no alpha channel to render as rgba"
                ))
            })?;
            Ok(format!("rgba({r}, {g}, {b}, {a})"))
        }
    }
}

/// Render a color in the format named by `tag` (`hex`, `rgb` or `rgba`).
pub fn format_tagged(color: &Color, tag: &str) -> Result<String> {
    format(color, tag.parse()?)
}

/// Render a color in the configured default format.
pub fn format_default(color: &Color, config: &ColorConfig) -> Result<String> {
    format(color, config.default_format)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
