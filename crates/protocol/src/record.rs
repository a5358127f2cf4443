//! Birthday record types.
//!
//! This module defines the raw contact shape handed over by contact sources,
//! the canonical [`BirthdayRecord`], and the [`MonthDay`] key used to order
//! birthdays independently of the birth year.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The recurrence coordinate of a birthday: month and day, ignoring the year.
///
/// Ordering is by month, then by day, which matches the calendar order of a
/// single year.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nextbday_protocol::MonthDay;
///
/// let key = MonthDay::from_date(NaiveDate::from_ymd_opt(1990, 3, 7).unwrap());
/// assert_eq!(key.to_string(), "03.07");
/// assert!(MonthDay::new(1, 31) < MonthDay::new(2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Creates a key from a month (1-12) and a day of month (1-31).
    #[must_use]
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Extracts the key of a calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.month(), date.day())
    }

    /// The month, 1-based.
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// The day of month, 1-based.
    #[must_use]
    pub const fn day(self) -> u32 {
        self.day
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}", self.month, self.day)
    }
}

impl From<NaiveDate> for MonthDay {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// A contact as delivered by a contact source, before normalization.
///
/// The birthday may be missing and may carry a time of day; both are dealt
/// with by [`normalize`](crate::normalize::normalize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContact {
    /// Family (last) name.
    pub family_name: String,
    /// Given (first) name.
    pub given_name: String,
    /// Birthday, if the contact has one.
    pub birthday: Option<NaiveDateTime>,
}

impl RawContact {
    /// Creates a raw contact.
    #[must_use]
    pub fn new(
        family_name: impl Into<String>,
        given_name: impl Into<String>,
        birthday: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            family_name: family_name.into(),
            given_name: given_name.into(),
            birthday,
        }
    }
}

impl From<BirthdayRecord> for RawContact {
    fn from(record: BirthdayRecord) -> Self {
        Self {
            family_name: record.family_name,
            given_name: record.given_name,
            birthday: Some(record.birthday.and_time(chrono::NaiveTime::MIN)),
        }
    }
}

/// A canonical birthday record.
///
/// Only the month and day of `birthday` matter for recurrence; the year is
/// the birth year and is used for the age only.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nextbday_protocol::BirthdayRecord;
///
/// let record = BirthdayRecord::new(
///     "Lovelace",
///     "Ada",
///     NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
/// );
/// assert_eq!(record.display_name(), "Ada Lovelace");
/// assert_eq!(record.month_day().to_string(), "12.10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayRecord {
    /// Family (last) name.
    pub family_name: String,
    /// Given (first) name.
    pub given_name: String,
    /// Birth date, at day precision.
    pub birthday: NaiveDate,
}

impl BirthdayRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(
        family_name: impl Into<String>,
        given_name: impl Into<String>,
        birthday: NaiveDate,
    ) -> Self {
        Self {
            family_name: family_name.into(),
            given_name: given_name.into(),
            birthday,
        }
    }

    /// The recurrence key of this record's birthday.
    #[must_use]
    pub fn month_day(&self) -> MonthDay {
        MonthDay::from_date(self.birthday)
    }

    /// The name as displayed in the widget: `"{given} {family}"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    /// The uniqueness key of this record.
    pub(crate) fn identity(&self) -> (&str, &str, MonthDay) {
        (&self.family_name, &self.given_name, self.month_day())
    }
}
