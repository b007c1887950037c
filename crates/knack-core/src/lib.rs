//! Knack Core - Foundation crate for the Knack utility library.
//!
//! This crate provides the shared error taxonomy, the enums that name color
//! formats, calendar units and date templates, and the TOML configuration
//! that the color and calendar crates read their defaults from.
//!
//! # Modules
//!
//! - [`error`] - Central error type with stable kind tags using thiserror
//! - [`config`] - TOML-based configuration with XDG paths and env overrides
//! - [`types`] - Shared enums (`ColorFormat`, `DateUnit`, `DateTemplate`, `MonthOverflow`, `TemplateScan`)
//!
//! # Example
//!
//! ```rust
//! use knack_core::{ColorFormat, DateUnit, ErrorKind, KnackConfig};
//!
//! let config = KnackConfig::default();
//! assert_eq!(config.color.default_format, ColorFormat::Hex);
//!
//! let err = "fortnight".parse::<DateUnit>().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidUnit);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{CalendarConfig, ColorConfig, KnackConfig};
pub use error::{ConfigError, ConfigResult, ErrorCode, ErrorKind, KnackError, Result};
pub use types::{ColorFormat, DateTemplate, DateUnit, MonthOverflow, TemplateScan};
