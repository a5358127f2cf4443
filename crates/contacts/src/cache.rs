//! Persistent cache of the normalized birthday list.
//!
//! Reading the address book can be slow or unavailable (for instance when the
//! widget is refreshed in the background), so the normalized list is written
//! to a JSON file and read back when the contacts are not re-read.
//!
//! # File Format
//!
//! A JSON array of records; birthdays are ISO-8601 strings:
//!
//! ```json
//! [
//!   { "familyName": "Knuth", "givenName": "Donald", "birthday": "1938-01-10" }
//! ]
//! ```
//!
//! Full ISO-8601 date-times (`"1938-01-10T00:00:00.000Z"`) are accepted when
//! reading and converted to the local calendar date.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use nextbday_protocol::{BirthdayRecord, SortedBirthdays};
use serde::{Deserialize, Deserializer};
use tracing::{debug, info, instrument, warn};

use crate::error::{Error, Result};
use crate::source::ContactSource;

/// Application directory inside the platform data directory.
const APP_DIR: &str = "nextbday";

/// Name of the cache file.
const CACHE_FILE_NAME: &str = "birthdays.cache.json";

/// A cached record, lenient about the birthday format.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedRecord {
    family_name: String,
    given_name: String,
    #[serde(deserialize_with = "iso_date")]
    birthday: NaiveDate,
}

impl From<CachedRecord> for BirthdayRecord {
    fn from(cached: CachedRecord) -> Self {
        BirthdayRecord::new(cached.family_name, cached.given_name, cached.birthday)
    }
}

/// Parses an ISO-8601 date or date-time into a calendar date.
fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Local).date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|datetime| datetime.date())
}

fn iso_date<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<NaiveDate, D::Error> {
    let value = String::deserialize(deserializer)?;
    parse_iso_date(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 date '{value}'")))
}

/// File-backed cache of the birthday list.
///
/// # Examples
///
/// ```no_run
/// use nextbday_contacts::{BirthdayCache, VcardFile};
///
/// # async fn example() -> nextbday_contacts::Result<()> {
/// let cache = BirthdayCache::new()?;
///
/// // Re-read the address book and update the cache...
/// let birthdays = cache.refresh(&VcardFile::new("contacts.vcf")).await?;
///
/// // ...or use what was cached last time.
/// let birthdays = cache.load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BirthdayCache {
    path: PathBuf,
}

impl BirthdayCache {
    /// Creates a cache in the platform data directory:
    ///
    /// - Linux: `~/.local/share/nextbday/birthdays.cache.json`
    /// - macOS: `~/Library/Application Support/nextbday/birthdays.cache.json`
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined.
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir().ok_or(Error::NoDataDirectory)?;
        Ok(Self::with_path(data_dir.join(APP_DIR).join(CACHE_FILE_NAME)))
    }

    /// Creates a cache stored in the given file.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The cache file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the cached birthday list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCacheFile`] if the cache has not been written yet,
    /// and another error if it cannot be read or parsed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<SortedBirthdays> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("cache file not found");
                return Err(Error::NoCacheFile {
                    path: self.path.clone(),
                });
            }
            Err(e) => {
                warn!(error = %e, "failed to read cache file");
                return Err(Error::io(&self.path, e));
            }
        };

        let records: Vec<CachedRecord> =
            serde_json::from_str(&content).map_err(|source| {
                warn!(error = %source, "failed to parse cache file");
                Error::InvalidCache {
                    path: self.path.clone(),
                    source,
                }
            })?;

        let birthdays = SortedBirthdays::from_records(records.into_iter().map(BirthdayRecord::from));
        debug!(birthdays = birthdays.len(), "loaded cached birthdays");
        Ok(birthdays)
    }

    /// Writes the birthday list, replacing any previous cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its directory cannot be written.
    #[instrument(skip(self, birthdays), fields(path = %self.path.display(), birthdays = birthdays.len()))]
    pub fn save(&self, birthdays: &SortedBirthdays) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.exists()) {
            debug!(?parent, "creating cache directory");
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let content = serde_json::to_string_pretty(birthdays.as_slice()).map_err(Error::Serialize)?;
        fs::write(&self.path, content).map_err(|e| Error::io(&self.path, e))?;
        debug!("cache saved successfully");
        Ok(())
    }

    /// Re-reads the address book, normalizes it, and updates the cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or the cache cannot be
    /// written.
    #[instrument(skip(self, source), fields(path = %self.path.display()))]
    pub async fn refresh<S: ContactSource + Sync>(&self, source: &S) -> Result<SortedBirthdays> {
        let contacts = source.fetch().await?;
        info!(contacts = contacts.len(), "fetched contacts");

        let birthdays = SortedBirthdays::from_raw(contacts);
        info!(birthdays = birthdays.len(), "unique contacts with birthday");

        self.save(&birthdays)?;
        Ok(birthdays)
    }
}
