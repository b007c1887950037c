//! Knack Color - Parsing and formatting of RGB(A) colors.
//!
//! Colors come in as hex strings (`#ff8800`), functional strings
//! (`rgb(255, 136, 0)`, `rgba(255, 136, 0, 0.5)`), structured components, or
//! dynamic JSON values. All of them converge on the canonical [`Color`],
//! which formats back to any [`ColorFormat`].
//!
//! # Example
//!
//! ```rust
//! use knack_color::{format, parse, Color, ColorFormat, ColorInput};
//!
//! # fn main() -> knack_core::Result<()> {
//! let color = parse(&ColorInput::from("rgba(10, 20, 30, 0.5)"))?;
//! assert_eq!(color, Color::rgba(10, 20, 30, 0.5));
//! assert_eq!(format(&color, ColorFormat::Hex)?, "#0a141e");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod format;
pub mod model;
pub mod parse;

// Re-export commonly used types
pub use format::{format, format_default, format_tagged};
pub use knack_core::ColorFormat;
pub use model::{Color, ColorInput};
pub use parse::{parse, parse_text, parse_value};
