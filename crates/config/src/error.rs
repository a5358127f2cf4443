//! Error types for settings operations.

use std::path::PathBuf;

/// Errors that can occur while loading, validating, or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("cannot read settings from {path}: {source}")]
    ReadFile {
        /// The settings file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be written.
    #[error("cannot write settings to {path}: {source}")]
    WriteFile {
        /// The settings file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON5.
    #[error("malformed settings: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// The settings could not be encoded as JSON.
    #[error("cannot encode settings: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// The background color is not a `#RRGGBB` value.
    #[error("invalid color '{0}': expected '#RRGGBB'")]
    InvalidColor(String),

    /// A setting holds a value outside its allowed range.
    #[error("invalid value for {field}: {reason}")]
    InvalidSetting {
        /// The offending setting.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// An unknown presentation size name.
    #[error("unknown size class '{0}'")]
    UnknownSizeClass(String),
}

/// Result type alias for settings operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
