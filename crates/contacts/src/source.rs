//! Contact sources.
//!
//! A [`ContactSource`] hands over raw contacts; normalization happens
//! afterwards, in [`BirthdayCache::refresh`](crate::BirthdayCache::refresh).

use std::future::Future;
use std::path::PathBuf;

use nextbday_protocol::RawContact;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::vcard::parse_contacts;

/// Anything that can produce the raw contacts of an address book.
pub trait ContactSource {
    /// Fetches all contacts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AccessDenied`] when the address book refuses access,
    /// or another error when it cannot be read.
    fn fetch(&self) -> impl Future<Output = Result<Vec<RawContact>>> + Send;
}

/// Reads contacts from a vCard (`.vcf`) export.
///
/// # Examples
///
/// ```no_run
/// use nextbday_contacts::{ContactSource, VcardFile};
///
/// # async fn example() -> nextbday_contacts::Result<()> {
/// let source = VcardFile::new("contacts.vcf");
/// let contacts = source.fetch().await?;
/// println!("{} contacts", contacts.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VcardFile {
    path: PathBuf,
}

impl VcardFile {
    /// Creates a source reading the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactSource for VcardFile {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<Vec<RawContact>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::io(&self.path, e))?;
        let contacts = parse_contacts(&content);
        debug!(contacts = contacts.len(), "read vCard file");
        Ok(contacts)
    }
}

/// An in-memory address book.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    contacts: Vec<RawContact>,
}

impl StaticSource {
    /// Creates a source returning `contacts`.
    #[must_use]
    pub fn new(contacts: Vec<RawContact>) -> Self {
        Self { contacts }
    }
}

impl ContactSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<RawContact>> {
        Ok(self.contacts.clone())
    }
}
