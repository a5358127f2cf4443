//! Dummy data generation for testing and demonstration.
//!
//! This module provides a small address book with birthdays spread over the
//! year, including a contact without birthday and a duplicate entry, so that
//! demonstrations exercise the whole normalization path.
//!
//! # Examples
//!
//! ```
//! use nextbday_protocol::dummy::{dummy_birthdays, dummy_contacts};
//!
//! assert_eq!(dummy_contacts().len(), 12);
//! assert_eq!(dummy_birthdays().len(), 10);
//! ```

use chrono::NaiveDate;

use crate::normalize::SortedBirthdays;
use crate::record::RawContact;

/// A builder for raw contacts with an optional birthday.
struct ContactBuilder {
    family_name: String,
    given_name: String,
    birthday: Option<(i32, u32, u32)>,
}

impl ContactBuilder {
    /// Creates a builder for a contact without birthday.
    fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            family_name: family_name.into(),
            given_name: given_name.into(),
            birthday: None,
        }
    }

    /// Sets the birthday.
    fn born(mut self, year: i32, month: u32, day: u32) -> Self {
        self.birthday = Some((year, month, day));
        self
    }

    /// Builds the contact; the birthday carries a time of day, as address
    /// books often store one.
    fn build(self) -> RawContact {
        let birthday = self.birthday.and_then(|(y, m, d)| {
            NaiveDate::from_ymd_opt(y, m, d).and_then(|date| date.and_hms_opt(12, 0, 0))
        });
        RawContact::new(self.family_name, self.given_name, birthday)
    }
}

/// Creates a demonstration address book.
///
/// Contains twelve contacts: one without birthday, one exact duplicate, and
/// ten distinct birthdays.
#[must_use]
pub fn dummy_contacts() -> Vec<RawContact> {
    vec![
        ContactBuilder::new("Ada", "Lovelace").born(1815, 12, 10).build(),
        ContactBuilder::new("Alan", "Turing").born(1912, 6, 23).build(),
        ContactBuilder::new("Grace", "Hopper").born(1906, 12, 9).build(),
        ContactBuilder::new("Edsger", "Dijkstra").born(1930, 5, 11).build(),
        ContactBuilder::new("Barbara", "Liskov").born(1939, 11, 7).build(),
        ContactBuilder::new("Donald", "Knuth").born(1938, 1, 10).build(),
        ContactBuilder::new("Margaret", "Hamilton").born(1936, 8, 17).build(),
        ContactBuilder::new("Dennis", "Ritchie").born(1941, 9, 9).build(),
        ContactBuilder::new("Frances", "Allen").born(1932, 8, 4).build(),
        ContactBuilder::new("Tony", "Hoare").born(1934, 1, 11).build(),
        ContactBuilder::new("Alan", "Turing").born(1912, 6, 23).build(),
        ContactBuilder::new("Anonymous", "Contributor").build(),
    ]
}

/// Creates the normalized birthday list of [`dummy_contacts`].
#[must_use]
pub fn dummy_birthdays() -> SortedBirthdays {
    SortedBirthdays::from_raw(dummy_contacts())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_birthdays_are_normalized() {
        let list = dummy_birthdays();
        assert_eq!(list.len(), 10);
        assert_eq!(list.as_slice()[0].family_name, "Knuth");
        assert_eq!(list.as_slice()[9].family_name, "Lovelace");
    }
}
