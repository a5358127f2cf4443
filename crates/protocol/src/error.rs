//! Error kinds surfaced to the presentation layer.
//!
//! Every failure that can prevent the birthday widget from showing its list
//! ends up as one of these kinds. The presentation layer picks a fallback
//! panel by matching on [`BirthdayError::kind`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent the birthday list from being displayed.
#[derive(Debug, Error)]
pub enum BirthdayError {
    /// The birthday cache was requested but has not been written yet.
    ///
    /// Recoverable by refreshing the cache from the contact source.
    #[error("the cache file {} does not exist", .path.display())]
    NoCacheFile {
        /// Where the cache was expected.
        path: PathBuf,
    },

    /// No contact with a birthday was found.
    #[error("no contacts found")]
    NoContacts,

    /// The contact source refused access.
    #[error("no access to the contacts was permitted")]
    ContactsAccessDenied,

    /// Anything else.
    #[error("unexpected error: {message}")]
    Unexpected {
        /// A description of the failure.
        message: String,
    },
}

/// The kind of a [`BirthdayError`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`BirthdayError::NoCacheFile`].
    NoCacheFile,
    /// See [`BirthdayError::NoContacts`].
    NoContacts,
    /// See [`BirthdayError::ContactsAccessDenied`].
    ContactsAccessDenied,
    /// See [`BirthdayError::Unexpected`].
    Unexpected,
}

impl BirthdayError {
    /// Wraps any displayable error as [`BirthdayError::Unexpected`].
    #[must_use]
    pub fn unexpected(error: impl std::fmt::Display) -> Self {
        Self::Unexpected {
            message: error.to_string(),
        }
    }

    /// Returns the kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use nextbday_protocol::{BirthdayError, ErrorKind};
    ///
    /// assert_eq!(BirthdayError::NoContacts.kind(), ErrorKind::NoContacts);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoCacheFile { .. } => ErrorKind::NoCacheFile,
            Self::NoContacts => ErrorKind::NoContacts,
            Self::ContactsAccessDenied => ErrorKind::ContactsAccessDenied,
            Self::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }

    /// Whether the error needs user action outside the widget.
    ///
    /// A missing cache or an empty address book are expected states; denied
    /// access and unexpected failures are not.
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(
            self,
            Self::ContactsAccessDenied | Self::Unexpected { .. }
        )
    }
}

/// A specialized Result type for birthday operations.
pub type Result<T> = std::result::Result<T, BirthdayError>;
