//! Error type definitions
//!
//! Defines the error types raised while loading a dataset settings file.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for settings loading
#[derive(Error, Debug)]
pub enum Error {
    /// The settings file could not be opened or read
    #[error("Cannot read settings file <{}>: {source}", path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file was read but is not valid UTF-8
    #[error("Settings file <{}> is not valid UTF-8: {source}", path.display())]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directive line without a usable `KEY=VALUE` split
    #[error("Malformed line {line}: '{text}'")]
    MalformedLine { line: usize, text: String },

    /// A recognized key whose value could not be converted
    #[error("Invalid value '{value}' for key {key}")]
    InvalidFieldValue { key: String, value: String },

    /// A mandatory field was absent after dispatch
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// Scenario code not in the built-in table (strict policy only)
    #[error("Unknown dataset scenario code '{code}'")]
    UnknownScenario { code: String },

    /// Explicit frame bounds that end before they start
    #[error("Invalid frame range: start {start} is after end {end}")]
    InvalidFrameRange { start: u32, end: u32 },

    /// Invalid loader options
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config-not-found error for `path`
    pub fn config_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigNotFound {
            path: path.into(),
            source,
        }
    }

    /// Map a failed read of `path`, separating undecodable files from unreadable ones
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            Self::InvalidEncoding { path, source }
        } else {
            Self::ConfigNotFound { path, source }
        }
    }

    /// Create a malformed line error
    pub fn malformed_line(line: usize, text: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            text: text.into(),
        }
    }

    /// Create an invalid field value error
    pub fn invalid_field(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingRequiredField(field.into())
    }

    /// Create an unknown scenario error
    pub fn unknown_scenario(code: impl Into<String>) -> Self {
        Self::UnknownScenario { code: code.into() }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
