//! Normalization of raw contacts into a sorted birthday list.
//!
//! The output of [`normalize`] is the only input the selector accepts: it is
//! sorted by [`MonthDay`](crate::MonthDay) and free of duplicates.

use std::collections::HashSet;

use crate::record::{BirthdayRecord, RawContact};

/// A birthday list sorted by month/day and deduplicated.
///
/// The list can only be built through normalization, so every value of this
/// type upholds the ordering invariant the selector relies on.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nextbday_protocol::{RawContact, SortedBirthdays};
///
/// let at = |m, d| NaiveDate::from_ymd_opt(1990, m, d).unwrap().and_hms_opt(8, 30, 0);
/// let list = SortedBirthdays::from_raw(vec![
///     RawContact::new("Doe", "Jane", at(7, 20)),
///     RawContact::new("Roe", "Rick", None),
///     RawContact::new("Poe", "Edgar", at(1, 19)),
/// ]);
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.as_slice()[0].given_name, "Edgar");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedBirthdays {
    records: Vec<BirthdayRecord>,
}

impl SortedBirthdays {
    /// Normalizes raw contacts into a sorted list.
    #[must_use]
    pub fn from_raw(contacts: impl IntoIterator<Item = RawContact>) -> Self {
        Self {
            records: normalize(contacts),
        }
    }

    /// Normalizes already-built records, e.g. records read back from a cache.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = BirthdayRecord>) -> Self {
        Self::from_raw(records.into_iter().map(RawContact::from))
    }

    /// The records in month/day order.
    #[must_use]
    pub fn as_slice(&self) -> &[BirthdayRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list holds no record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the list, returning the records.
    #[must_use]
    pub fn into_vec(self) -> Vec<BirthdayRecord> {
        self.records
    }
}

/// Converts raw contacts into canonical, sorted, deduplicated records.
///
/// - Contacts without a birthday are dropped.
/// - Birthdays are truncated to their calendar date.
/// - Records are sorted by month/day with a stable sort, so equal keys keep
///   their input order.
/// - Duplicates by `(family name, given name, month/day)` collapse to their
///   first occurrence in sorted order.
#[must_use]
pub fn normalize(contacts: impl IntoIterator<Item = RawContact>) -> Vec<BirthdayRecord> {
    let mut records: Vec<BirthdayRecord> = contacts
        .into_iter()
        .filter_map(|contact| {
            let birthday = contact.birthday?.date();
            Some(BirthdayRecord {
                family_name: contact.family_name,
                given_name: contact.given_name,
                birthday,
            })
        })
        .collect();

    // `sort_by_key` is stable.
    records.sort_by_key(BirthdayRecord::month_day);

    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(records.len());
    for record in records {
        let identity = record.identity();
        let key = (identity.0.to_owned(), identity.1.to_owned(), identity.2);
        if seen.insert(key) {
            unique.push(record);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::record::MonthDay;

    fn at(y: i32, m: u32, d: u32, h: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0)
    }

    #[test]
    fn drops_contacts_without_birthday() {
        let records = normalize(vec![
            RawContact::new("A", "a", None),
            RawContact::new("B", "b", at(1990, 1, 1, 0)),
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].family_name, "B");
    }

    #[test]
    fn strips_time_of_day_and_keeps_year() {
        let records = normalize(vec![RawContact::new("A", "a", at(1984, 6, 2, 23))]);
        assert_eq!(
            records[0].birthday,
            NaiveDate::from_ymd_opt(1984, 6, 2).unwrap()
        );
    }

    #[test]
    fn sorts_by_month_day_regardless_of_year() {
        let records = normalize(vec![
            RawContact::new("A", "a", at(2000, 12, 25, 0)),
            RawContact::new("B", "b", at(1950, 3, 10, 0)),
            RawContact::new("C", "c", at(1999, 1, 5, 0)),
        ]);
        let keys: Vec<String> = records.iter().map(|r| r.month_day().to_string()).collect();
        assert_eq!(keys, ["01.05", "03.10", "12.25"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let records = normalize(vec![
            RawContact::new("Zed", "z", at(2000, 4, 1, 0)),
            RawContact::new("Abe", "a", at(1970, 4, 1, 0)),
        ]);
        assert_eq!(records[0].family_name, "Zed");
        assert_eq!(records[1].family_name, "Abe");
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let records = normalize(vec![
            RawContact::new("Doe", "Jane", at(1990, 5, 12, 9)),
            RawContact::new("Doe", "Jane", at(1990, 5, 12, 17)),
            RawContact::new("Doe", "John", at(1990, 5, 12, 0)),
        ]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].given_name, "Jane");
        assert_eq!(records[1].given_name, "John");
    }

    #[test]
    fn same_name_on_different_days_is_kept() {
        let records = normalize(vec![
            RawContact::new("Doe", "Jane", at(1990, 5, 12, 0)),
            RawContact::new("Doe", "Jane", at(1990, 5, 13, 0)),
        ]);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn sorted_birthdays_from_records_is_a_fixed_point() {
        let list = SortedBirthdays::from_raw(vec![
            RawContact::new("A", "a", at(2000, 9, 9, 0)),
            RawContact::new("B", "b", at(2000, 2, 2, 0)),
        ]);
        let again = SortedBirthdays::from_records(list.clone().into_vec());
        assert_eq!(list, again);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let list = SortedBirthdays::from_raw(Vec::new());
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn first_key_is_smallest() {
        let list = SortedBirthdays::from_raw(vec![
            RawContact::new("A", "a", at(2000, 11, 1, 0)),
            RawContact::new("B", "b", at(2000, 2, 28, 0)),
        ]);
        assert_eq!(list.as_slice()[0].month_day(), MonthDay::new(2, 28));
    }
}
