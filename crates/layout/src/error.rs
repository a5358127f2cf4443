//! Error types for layout computation.

use nextbday_protocol::BirthdayError;
use thiserror::Error;

/// Errors that can occur while laying out the widget.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The text measurement engine failed.
    #[error("text measurement failed: {message}")]
    Measurement {
        /// Description of the failure.
        message: String,
    },

    /// The measurement engine answered with the wrong number of widths.
    #[error("measured {actual} widths for {expected} texts")]
    WidthCount {
        /// Number of texts submitted.
        expected: usize,
        /// Number of widths returned.
        actual: usize,
    },

    /// There is nothing to lay out.
    #[error("no birthdays to display")]
    NoEntries,
}

impl LayoutError {
    /// Creates a measurement error from any displayable failure.
    pub fn measurement(error: impl std::fmt::Display) -> Self {
        Self::Measurement {
            message: error.to_string(),
        }
    }
}

impl From<LayoutError> for BirthdayError {
    fn from(error: LayoutError) -> Self {
        match error {
            LayoutError::NoEntries => BirthdayError::NoContacts,
            other => BirthdayError::unexpected(other),
        }
    }
}

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
