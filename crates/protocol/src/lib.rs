//! Shared protocol types for the nextbday application.
//!
//! This crate defines the birthday records used across all nextbday
//! components and the pure computations performed on them: normalization,
//! circular selection of the next birthdays, and date metrics.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`record`]: Raw contacts, canonical records, and the month/day key
//! - [`normalize`]: Sorting and deduplication into [`SortedBirthdays`]
//! - [`select`]: Circular search for the next upcoming birthdays
//! - [`metrics`]: Day counts and ages
//! - [`error`]: Error kinds surfaced to the presentation layer
//! - [`dummy`]: A demonstration address book
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use nextbday_protocol::{SortedBirthdays, dummy::dummy_contacts, metrics, select_next};
//!
//! let list = SortedBirthdays::from_raw(dummy_contacts());
//! let today = NaiveDate::from_ymd_opt(2024, 12, 9).unwrap();
//!
//! let next = metrics::enrich(select_next(&list, today, 3), today);
//! assert_eq!(next[0].record.given_name, "Grace");
//! assert_eq!(next[0].date_diff, 0);
//! assert_eq!(next[1].date_diff, 1);
//! ```

pub mod dummy;
pub mod error;
pub mod metrics;
pub mod normalize;
pub mod record;
pub mod select;

// Re-export primary types at crate root for convenience
pub use error::{BirthdayError, ErrorKind, Result};
pub use metrics::EnrichedEntry;
pub use normalize::{SortedBirthdays, normalize};
pub use record::{BirthdayRecord, MonthDay, RawContact};
pub use select::{SelectionWindow, select_next};
