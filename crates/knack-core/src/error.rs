//! Core error types for the Knack library.
//!
//! Every failure in the color and calendar crates is a [`KnackError`]. Each
//! variant carries a human-readable message and maps to a stable
//! [`ErrorKind`] tag, plus a coarse [`ErrorCode`] that groups kinds into
//! caller mistakes and bad data.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Central error type for all Knack operations.
#[derive(Error, Debug)]
pub enum KnackError {
    /// Color text does not match the hex or functional grammar
    #[error("invalid color format: {0}")]
    InvalidFormat(String),

    /// Alpha channel is numeric but outside [0, 1]
    #[error("invalid color alpha value: {0}")]
    InvalidAlpha(String),

    /// Red, green or blue channel does not fit in 0-255
    #[error("color channel out of range: {0}")]
    ChannelOutOfRange(String),

    /// Field present but not numeric, or input of an unsupported shape
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// `rgba` output requested for a color whose alpha was never given
    #[error("missing alpha channel: {0}")]
    MissingAlpha(String),

    /// Unrecognized color format or date template tag
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Unrecognized calendar unit tag
    #[error("invalid date unit: {0}")]
    InvalidUnit(String),

    /// Offset amount is not an integer or does not fit the calendar
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Impossible or unrepresentable calendar date
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Text that no supported date layout accepts
    #[error("invalid date string: {0}")]
    InvalidDateString(String),

    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl KnackError {
    /// Stable tag identifying what went wrong.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
            Self::InvalidAlpha(_) => ErrorKind::InvalidAlpha,
            Self::ChannelOutOfRange(_) => ErrorKind::ChannelOutOfRange,
            Self::TypeMismatch(_) => ErrorKind::TypeMismatch,
            Self::MissingAlpha(_) => ErrorKind::MissingAlpha,
            Self::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Self::InvalidUnit(_) => ErrorKind::InvalidUnit,
            Self::InvalidAmount(_) => ErrorKind::InvalidAmount,
            Self::InvalidDate(_) => ErrorKind::InvalidDate,
            Self::InvalidDateString(_) => ErrorKind::InvalidDateString,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Coarse classification of the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.kind().code()
    }
}

/// Stable tag for each [`KnackError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// See [`KnackError::InvalidFormat`]
    InvalidFormat,
    /// See [`KnackError::InvalidAlpha`]
    InvalidAlpha,
    /// See [`KnackError::ChannelOutOfRange`]
    ChannelOutOfRange,
    /// See [`KnackError::TypeMismatch`]
    TypeMismatch,
    /// See [`KnackError::MissingAlpha`]
    MissingAlpha,
    /// See [`KnackError::UnsupportedFormat`]
    UnsupportedFormat,
    /// See [`KnackError::InvalidUnit`]
    InvalidUnit,
    /// See [`KnackError::InvalidAmount`]
    InvalidAmount,
    /// See [`KnackError::InvalidDate`]
    InvalidDate,
    /// See [`KnackError::InvalidDateString`]
    InvalidDateString,
    /// See [`KnackError::Config`]
    Config,
}

impl ErrorKind {
    /// The `snake_case` tag for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_format",
            Self::InvalidAlpha => "invalid_alpha",
            Self::ChannelOutOfRange => "channel_out_of_range",
            Self::TypeMismatch => "type_mismatch",
            Self::MissingAlpha => "missing_alpha",
            Self::UnsupportedFormat => "unsupported_format",
            Self::InvalidUnit => "invalid_unit",
            Self::InvalidAmount => "invalid_amount",
            Self::InvalidDate => "invalid_date",
            Self::InvalidDateString => "invalid_date_string",
            Self::Config => "config",
        }
    }

    /// Map the kind onto its coarse [`ErrorCode`].
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::TypeMismatch
            | Self::UnsupportedFormat
            | Self::InvalidUnit
            | Self::InvalidAmount => ErrorCode::BadInput,
            Self::InvalidFormat
            | Self::InvalidAlpha
            | Self::ChannelOutOfRange
            | Self::MissingAlpha
            | Self::InvalidDate
            | Self::InvalidDateString => ErrorCode::InvalidData,
            Self::Config => ErrorCode::ServerError,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse error classification.
///
/// `BadInput` means the caller passed the wrong kind of thing (a unit or
/// format tag that does not exist, a non-numeric field). `InvalidData` means
/// the value had the right shape but bad content. `ServerError` covers the
/// library's own environment, such as an unreadable config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Wrong type or unknown tag supplied by the caller
    BadInput,
    /// Well-typed value with invalid content
    InvalidData,
    /// Failure in the surrounding environment
    ServerError,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `KnackError`.
pub type Result<T> = std::result::Result<T, KnackError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KnackError::InvalidFormat("'#12345' is not #RRGGBB".to_string());
        assert_eq!(
            err.to_string(),
            "invalid color format: '#12345' is not #RRGGBB"
        );

        let err = ConfigError::NoConfigDir;
        assert_eq!(
            err.to_string(),
            "could not determine config directory (XDG base directories not available)"
        );
    }

    #[test]
    fn test_error_kind_and_code() {
        let err = KnackError::TypeMismatch("field 'r' is a string".to_string());
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.code(), ErrorCode::BadInput);

        let err = KnackError::InvalidAlpha("1.5".to_string());
        assert_eq!(err.kind(), ErrorKind::InvalidAlpha);
        assert_eq!(err.code(), ErrorCode::InvalidData);

        let err: KnackError = ConfigError::NoConfigDir.into();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(err.code(), ErrorCode::ServerError);
    }

    #[test]
    fn test_error_from_config() {
        let config_err = ConfigError::InvalidValue {
            field: "calendar.month_overflow".to_string(),
            reason: "expected clamp or roll".to_string(),
        };
        let knack_err: KnackError = config_err.into();
        assert!(matches!(knack_err, KnackError::Config(_)));
    }

    #[test]
    fn test_error_kind_serialization() {
        let json = serde_json::to_string(&ErrorKind::InvalidDateString).expect("serialize kind");
        assert_eq!(json, "\"invalid_date_string\"");
        assert_eq!(ErrorKind::InvalidDateString.to_string(), "invalid_date_string");

        let code: ErrorCode = serde_json::from_str("\"bad_input\"").expect("deserialize code");
        assert_eq!(code, ErrorCode::BadInput);
    }
}
