//! API error types

use std::string::FromUtf8Error;
use thiserror::Error;
use zenhan_core::{EncodingFault, UnknownRule};

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Rule name that no rule answers to
    #[error(transparent)]
    UnknownRule(#[from] UnknownRule),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Shift_JIS input that does not decode
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingFault),

    /// Malformed TOML configuration
    #[cfg(feature = "serde")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
