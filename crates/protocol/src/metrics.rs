//! Day counts and ages for selected birthdays.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::record::BirthdayRecord;

/// A selected record together with its distance and age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedEntry {
    /// The underlying record.
    #[serde(flatten)]
    pub record: BirthdayRecord,
    /// Days from today until the next occurrence (0 when it is today).
    pub date_diff: u32,
    /// Current year minus birth year.
    pub age: i32,
}

/// Moves `date` into `year`, rolling 29 February over to 1 March when `year`
/// is not a leap year.
fn in_year(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(date)
}

/// Number of days from `today` until the next occurrence of `birthday`.
///
/// Returns 0 when the birthday is today. The result is never negative. When
/// this year's occurrence has passed, that occurrence is moved one year on, so
/// a 29 February birthday already rolled over to 1 March stays on 1 March.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nextbday_protocol::metrics::day_diff;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let born = |m, d| NaiveDate::from_ymd_opt(1990, m, d).unwrap();
///
/// assert_eq!(day_diff(today, born(3, 10)), 0);
/// assert_eq!(day_diff(today, born(3, 11)), 1);
/// assert_eq!(day_diff(today, born(3, 9)), 364);
/// ```
#[must_use]
pub fn day_diff(today: NaiveDate, birthday: NaiveDate) -> u32 {
    let mut next = in_year(birthday, today.year());
    if next < today {
        next = in_year(next, today.year() + 1);
    }
    let days = (next - today).num_days();
    u32::try_from(days).unwrap_or(0)
}

/// Age reached on the birthday: `today.year - birthday.year`.
///
/// The value is not corrected when the upcoming occurrence falls into the
/// next calendar year, so a birthday shown after the year wrap reports one
/// year less than the age being turned.
#[must_use]
pub fn age(today: NaiveDate, birthday: NaiveDate) -> i32 {
    today.year() - birthday.year()
}

/// Attaches the day count and age to each selected record.
#[must_use]
pub fn enrich(records: Vec<BirthdayRecord>, today: NaiveDate) -> Vec<EnrichedEntry> {
    records
        .into_iter()
        .map(|record| EnrichedEntry {
            date_diff: day_diff(today, record.birthday),
            age: age(today, record.birthday),
            record,
        })
        .collect()
}

/// The instant the birthday list should next be refreshed: the start of the
/// day following `now`.
#[must_use]
pub fn next_refresh(now: NaiveDateTime) -> NaiveDateTime {
    let tomorrow = now
        .date()
        .checked_add_days(Days::new(1))
        .unwrap_or(now.date());
    tomorrow.and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn birthday_today_is_zero_days_away() {
        assert_eq!(day_diff(date(2024, 3, 10), date(1970, 3, 10)), 0);
    }

    #[test]
    fn yesterday_is_almost_a_year_away() {
        // 2024-03-09 -> 2025-03-09 does not span a leap day.
        assert_eq!(day_diff(date(2024, 3, 10), date(1970, 3, 9)), 364);
        // 2023-03-09 -> 2024-03-09 spans 2024-02-29.
        assert_eq!(day_diff(date(2023, 3, 10), date(1970, 3, 9)), 365);
    }

    #[test]
    fn crosses_year_boundary() {
        assert_eq!(day_diff(date(2024, 12, 31), date(2000, 1, 1)), 1);
    }

    #[test]
    fn leap_day_birthday_rolls_to_march_first() {
        assert_eq!(day_diff(date(2023, 2, 28), date(2000, 2, 29)), 1);
        assert_eq!(day_diff(date(2024, 2, 28), date(2000, 2, 29)), 1);
        assert_eq!(day_diff(date(2023, 3, 1), date(2000, 2, 29)), 0);
        // 2023-03-01 has passed; the next occurrence is 2024-03-01.
        assert_eq!(day_diff(date(2023, 3, 2), date(2000, 2, 29)), 365);
    }

    #[test]
    fn age_is_plain_year_difference() {
        assert_eq!(age(date(2024, 6, 1), date(1990, 12, 31)), 34);
        assert_eq!(age(date(2024, 6, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn age_is_not_adjusted_across_year_wrap() {
        // On 2024-12-31 the 1990-01-01 birthday is one day away, when the
        // person turns 35; the reported age stays at 34.
        let today = date(2024, 12, 31);
        let entries = enrich(
            vec![BirthdayRecord::new("Doe", "Jane", date(1990, 1, 1))],
            today,
        );
        assert_eq!(entries[0].date_diff, 1);
        assert_eq!(entries[0].age, 34);
    }

    #[test]
    fn enrich_preserves_order() {
        let today = date(2024, 5, 1);
        let entries = enrich(
            vec![
                BirthdayRecord::new("A", "a", date(1990, 5, 2)),
                BirthdayRecord::new("B", "b", date(1980, 1, 1)),
            ],
            today,
        );
        assert_eq!(entries[0].record.family_name, "A");
        assert_eq!(entries[0].date_diff, 1);
        assert_eq!(entries[1].record.family_name, "B");
        assert_eq!(entries[1].date_diff, 245);
    }

    #[test]
    fn next_refresh_is_next_midnight() {
        let now = date(2024, 12, 31).and_hms_opt(13, 45, 0).unwrap();
        assert_eq!(
            next_refresh(now),
            date(2025, 1, 1).and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn enriched_entry_serializes_flat() {
        let entry = EnrichedEntry {
            record: BirthdayRecord::new("Doe", "Jane", date(1990, 5, 12)),
            date_diff: 3,
            age: 34,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["familyName"], "Doe");
        assert_eq!(json["dateDiff"], 3);
        assert_eq!(json["age"], 34);
    }
}
