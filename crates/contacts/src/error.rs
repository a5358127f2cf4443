//! Error types for contact and cache operations.

use std::io;
use std::path::{Path, PathBuf};

use nextbday_protocol::BirthdayError;

/// Errors that can occur while reading contacts or the birthday cache.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The cache file has not been written yet.
    #[error("the cache file {} does not exist", .path.display())]
    NoCacheFile {
        /// Where the cache was expected.
        path: PathBuf,
    },

    /// The operating system refused access to a contacts or cache file.
    #[error("access to {} was denied: {source}", .path.display())]
    AccessDenied {
        /// The file that could not be accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The cache file does not hold a valid birthday list.
    #[error("failed to parse cache file {}: {source}", .path.display())]
    InvalidCache {
        /// The cache file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The birthday list could not be serialized.
    #[error("failed to serialize birthdays: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The platform data directory could not be determined.
    #[error("could not determine data directory")]
    NoDataDirectory,
}

impl Error {
    /// Classifies an I/O error on `path`, singling out permission failures.
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::AccessDenied { path, source },
            _ => Self::Io { path, source },
        }
    }
}

impl From<Error> for BirthdayError {
    fn from(error: Error) -> Self {
        match error {
            Error::NoCacheFile { path } => Self::NoCacheFile { path },
            Error::AccessDenied { .. } => Self::ContactsAccessDenied,
            other => Self::unexpected(other),
        }
    }
}

/// A specialized Result type for contact and cache operations.
pub type Result<T> = std::result::Result<T, Error>;
