//! Circular selection of the next upcoming birthdays.
//!
//! A [`SortedBirthdays`] list covers one calendar year. Searching forward from
//! a reference date treats that year as a ring: once the end of the list is
//! reached, selection continues with next year's earliest birthdays.

use chrono::NaiveDate;

use crate::normalize::SortedBirthdays;
use crate::record::{BirthdayRecord, MonthDay};

/// A window into the (possibly wrapped) birthday list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionWindow {
    /// Index of the first selected record in the sorted list.
    pub start: usize,
    /// Number of records requested.
    pub count: usize,
}

impl SelectionWindow {
    /// Locates the window of `count` birthdays starting on or after `today`.
    ///
    /// When `today` is past the last birthday of the year, the window starts
    /// at the first record, since every birthday next occurs next year.
    /// Otherwise `start` is the lower bound of `today` in the list.
    #[must_use]
    pub fn locate(records: &[BirthdayRecord], today: MonthDay, count: usize) -> Self {
        let Some(last) = records.last() else {
            return Self { start: 0, count };
        };

        if today > last.month_day() {
            return Self { start: 0, count };
        }

        let mut start = 0;
        let mut end = records.len() - 1;
        while start < end {
            let mid = start + (end - start) / 2;
            if records[mid].month_day() < today {
                start = mid + 1;
            } else {
                end = mid;
            }
        }

        Self { start, count }
    }

    /// Whether the window runs past the end of a list of `len` records.
    #[must_use]
    pub fn wraps(&self, len: usize) -> bool {
        self.start + self.count > len
    }
}

/// Returns the next `count` birthdays on or after `today`.
///
/// The result is ordered by upcoming date. If the selection reaches the end of
/// the year, it continues with the earliest birthdays of the list, each record
/// appearing at most once. Fewer than `count` records are returned when the
/// list is shorter than `count`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nextbday_protocol::{RawContact, SortedBirthdays, select_next};
///
/// let at = |m, d| NaiveDate::from_ymd_opt(1990, m, d).unwrap().and_hms_opt(0, 0, 0);
/// let list = SortedBirthdays::from_raw(vec![
///     RawContact::new("A", "Jan", at(1, 5)),
///     RawContact::new("B", "Mar", at(3, 10)),
///     RawContact::new("C", "Dec", at(12, 25)),
/// ]);
///
/// let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
/// let next: Vec<_> = select_next(&list, today, 2)
///     .into_iter()
///     .map(|r| r.given_name)
///     .collect();
/// assert_eq!(next, ["Dec", "Jan"]);
/// ```
#[must_use]
pub fn select_next(list: &SortedBirthdays, today: NaiveDate, count: usize) -> Vec<BirthdayRecord> {
    let records = list.as_slice();
    if records.is_empty() || count == 0 {
        return Vec::new();
    }

    let window = SelectionWindow::locate(records, MonthDay::from_date(today), count);

    // Next year's early birthdays follow this year's remaining ones.
    let view: Vec<&BirthdayRecord> = if window.wraps(records.len()) {
        records
            .iter()
            .chain(records[..window.start].iter())
            .collect()
    } else {
        records.iter().collect()
    };

    view.into_iter()
        .skip(window.start)
        .take(window.count)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawContact;

    fn list(keys: &[(u32, u32)]) -> SortedBirthdays {
        SortedBirthdays::from_raw(keys.iter().enumerate().map(|(i, &(m, d))| {
            RawContact::new(
                format!("Family{i}"),
                format!("Given{i}"),
                NaiveDate::from_ymd_opt(1980, m, d)
                    .unwrap()
                    .and_hms_opt(0, 0, 0),
            )
        }))
    }

    fn sample() -> SortedBirthdays {
        list(&[(1, 5), (3, 10), (7, 20), (12, 25)])
    }

    fn today(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn keys(records: &[BirthdayRecord]) -> Vec<String> {
        records.iter().map(|r| r.month_day().to_string()).collect()
    }

    #[test]
    fn selects_from_today_inclusive() {
        let next = select_next(&sample(), today(3, 10), 2);
        assert_eq!(keys(&next), ["03.10", "07.20"]);
    }

    #[test]
    fn selects_following_birthday_between_keys() {
        let next = select_next(&sample(), today(3, 11), 1);
        assert_eq!(keys(&next), ["07.20"]);
    }

    #[test]
    fn wraps_when_today_is_after_last_birthday() {
        let next = select_next(&sample(), today(12, 26), 3);
        assert_eq!(keys(&next), ["01.05", "03.10", "07.20"]);
    }

    #[test]
    fn extends_tail_with_front_of_list() {
        let next = select_next(&sample(), today(12, 25), 3);
        assert_eq!(keys(&next), ["12.25", "01.05", "03.10"]);
    }

    #[test]
    fn never_repeats_a_record() {
        let next = select_next(&sample(), today(7, 1), 10);
        assert_eq!(keys(&next), ["07.20", "12.25", "01.05", "03.10"]);
    }

    #[test]
    fn clips_to_list_length_when_starting_at_zero() {
        let next = select_next(&sample(), today(1, 1), 10);
        assert_eq!(keys(&next), ["01.05", "03.10", "07.20", "12.25"]);
    }

    #[test]
    fn empty_list_yields_nothing() {
        assert!(select_next(&SortedBirthdays::default(), today(5, 5), 3).is_empty());
    }

    #[test]
    fn zero_count_yields_nothing() {
        assert!(select_next(&sample(), today(5, 5), 0).is_empty());
    }

    #[test]
    fn single_record_list() {
        let single = list(&[(6, 15)]);
        assert_eq!(keys(&select_next(&single, today(1, 1), 3)), ["06.15"]);
        assert_eq!(keys(&select_next(&single, today(6, 15), 3)), ["06.15"]);
        assert_eq!(keys(&select_next(&single, today(6, 16), 3)), ["06.15"]);
    }

    #[test]
    fn lower_bound_finds_first_of_equal_keys() {
        let dupes = list(&[(2, 1), (4, 4), (4, 4), (9, 9)]);
        let window = SelectionWindow::locate(dupes.as_slice(), MonthDay::new(4, 4), 2);
        assert_eq!(window.start, 1);
    }

    #[test]
    fn window_reports_wrapping() {
        let window = SelectionWindow { start: 3, count: 3 };
        assert!(window.wraps(4));
        assert!(!window.wraps(6));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::record::RawContact;

    proptest! {
        #[test]
        fn selection_starts_at_first_upcoming_birthday(
            days in prop::collection::vec((1u32..=12, 1u32..=28), 1..30),
            (month, day) in (1u32..=12, 1u32..=28),
            count in 1usize..12,
        ) {
            let list = SortedBirthdays::from_raw(days.iter().enumerate().map(|(i, &(m, d))| {
                RawContact::new(
                    format!("F{i}"),
                    "G",
                    NaiveDate::from_ymd_opt(1990, m, d).unwrap().and_hms_opt(0, 0, 0),
                )
            }));
            let today = NaiveDate::from_ymd_opt(2023, month, day).unwrap();
            let next = select_next(&list, today, count);

            prop_assert_eq!(next.len(), count.min(list.len()));

            let key = MonthDay::from_date(today);
            let expected_first = list
                .as_slice()
                .iter()
                .find(|r| r.month_day() >= key)
                .unwrap_or(&list.as_slice()[0]);
            prop_assert_eq!(&next[0], expected_first);
        }
    }
}
