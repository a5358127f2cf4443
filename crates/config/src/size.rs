//! Presentation size classes and per-size value tables.
//!
//! Every visual constant of the widget may differ by presentation size. A
//! [`PerSize`] table maps size keys (`"small"`, `"medium"`, ...) plus an
//! optional `"default"` key to values, and resolves a size class in three
//! tiers:
//!
//! 1. the entry for the exact size key,
//! 2. the `"default"` entry,
//! 3. a hard-coded fallback supplied by the caller.
//!
//! # Formats
//!
//! ```json5
//! {
//!   // Table form
//!   title_size: { small: 12, medium: 18, default: 26 },
//!   // Scalar form, equivalent to { default: 0.5 }
//!   vertical_text_spacing: 0.5,
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Key of the catch-all entry of a [`PerSize`] table.
pub const DEFAULT_KEY: &str = "default";

/// The presentation size of the widget.
///
/// # Examples
///
/// ```
/// use nextbday_config::SizeClass;
///
/// let size: SizeClass = "accessoryRectangular".parse().unwrap();
/// assert_eq!(size, SizeClass::AccessoryRectangular);
/// assert_eq!(SizeClass::Small.key(), "small");
/// assert!("huge".parse::<SizeClass>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeClass {
    /// Small square widget.
    Small,
    /// Medium, wide widget.
    Medium,
    /// Large widget.
    #[default]
    Large,
    /// Extra large widget.
    ExtraLarge,
    /// Rectangular lock-screen accessory.
    AccessoryRectangular,
}

impl SizeClass {
    /// All size classes.
    pub const ALL: [Self; 5] = [
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
        Self::AccessoryRectangular,
    ];

    /// The key of this size in [`PerSize`] tables.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extraLarge",
            Self::AccessoryRectangular => "accessoryRectangular",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SizeClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownSizeClass(s.to_string()))
    }
}

/// A value that may vary by presentation size.
///
/// # Examples
///
/// ```
/// use nextbday_config::{PerSize, SizeClass};
///
/// let padding = PerSize::from_entries([("small", 3.0), ("default", 10.0)]);
/// assert_eq!(padding.resolve(SizeClass::Small, 0.0), 3.0);
/// assert_eq!(padding.resolve(SizeClass::Large, 0.0), 10.0);
///
/// let empty: PerSize<f64> = PerSize::default();
/// assert_eq!(empty.resolve(SizeClass::Large, 42.0), 42.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PerSize<T> {
    entries: BTreeMap<String, T>,
}

impl<T> Default for PerSize<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> PerSize<T> {
    /// Creates a table holding only a `"default"` entry.
    #[must_use]
    pub fn uniform(value: T) -> Self {
        Self::from_entries([(DEFAULT_KEY, value)])
    }

    /// Creates a table from `(key, value)` pairs.
    #[must_use]
    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, T)>) -> Self {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Iterates over all entries, including `"default"`.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Looks up `key`, then `"default"`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&T> {
        self.entries
            .get(key)
            .or_else(|| self.entries.get(DEFAULT_KEY))
    }
}

impl<T: Clone> PerSize<T> {
    /// Resolves a size class: exact entry, then `"default"`, then `fallback`.
    #[must_use]
    pub fn resolve(&self, size: SizeClass, fallback: T) -> T {
        resolve(self, size.key(), fallback)
    }
}

/// Three-tier lookup of `key` in `table`: exact key, then `"default"`, then
/// `fallback`.
#[must_use]
pub fn resolve<T: Clone>(table: &PerSize<T>, key: &str, fallback: T) -> T {
    table.lookup(key).cloned().unwrap_or(fallback)
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PerSize<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Table(BTreeMap<String, T>),
            Single(T),
        }

        Ok(match Repr::<T>::deserialize(deserializer)? {
            Repr::Table(entries) => Self { entries },
            Repr::Single(value) => Self::uniform(value),
        })
    }
}

/// The unit appended to day counts, e.g. `"d"` or `["day", "days"]`.
///
/// # Examples
///
/// ```
/// use nextbday_config::DayUnit;
///
/// let unit = DayUnit::pair(" day", " days");
/// assert_eq!(unit.for_days(1), " day");
/// assert_eq!(unit.for_days(5), " days");
/// assert_eq!(DayUnit::from("d").for_days(1), "d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayUnit {
    /// The same unit for every count.
    Single(String),
    /// `[singular, plural]`.
    Pair([String; 2]),
}

impl DayUnit {
    /// Creates a singular/plural unit.
    #[must_use]
    pub fn pair(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self::Pair([singular.into(), plural.into()])
    }

    /// The unit to use for `days`: the singular form only for exactly one day.
    #[must_use]
    pub fn for_days(&self, days: u32) -> &str {
        match self {
            Self::Single(unit) => unit,
            Self::Pair([singular, _]) if days == 1 => singular,
            Self::Pair([_, plural]) => plural,
        }
    }
}

impl From<&str> for DayUnit {
    fn from(unit: &str) -> Self {
        Self::Single(unit.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_class_parses_case_insensitively() {
        assert_eq!("Medium".parse::<SizeClass>().unwrap(), SizeClass::Medium);
        assert_eq!(
            "extralarge".parse::<SizeClass>().unwrap(),
            SizeClass::ExtraLarge
        );
    }

    #[test]
    fn size_class_rejects_unknown_names() {
        let err = "tiny".parse::<SizeClass>().unwrap_err();
        assert_eq!(err.to_string(), "unknown size class 'tiny'");
    }

    #[test]
    fn size_class_serializes_as_key() {
        for size in SizeClass::ALL {
            let json = serde_json::to_string(&size).unwrap();
            assert_eq!(json, format!("\"{}\"", size.key()));
        }
    }

    #[test]
    fn resolve_prefers_exact_key() {
        let table = PerSize::from_entries([("medium", 18.0), ("default", 26.0)]);
        assert_eq!(table.resolve(SizeClass::Medium, 1.0), 18.0);
    }

    #[test]
    fn resolve_falls_back_to_default_entry() {
        let table = PerSize::from_entries([("medium", 18.0), ("default", 26.0)]);
        assert_eq!(table.resolve(SizeClass::Small, 1.0), 26.0);
    }

    #[test]
    fn resolve_falls_back_to_hard_value() {
        let table = PerSize::from_entries([("medium", 18.0)]);
        assert_eq!(table.resolve(SizeClass::Small, 1.0), 1.0);
        assert_eq!(resolve(&table, "unknown", 7.0), 7.0);
    }

    #[test]
    fn zero_entry_is_a_value_not_a_miss() {
        let table = PerSize::from_entries([("accessoryRectangular", 0.0), ("default", 26.0)]);
        assert_eq!(table.resolve(SizeClass::AccessoryRectangular, 26.0), 0.0);
    }

    #[test]
    fn deserializes_table_form() {
        let table: PerSize<f64> = serde_json::from_str(r#"{"small": 4, "default": 10}"#).unwrap();
        assert_eq!(table.resolve(SizeClass::Small, 0.0), 4.0);
        assert_eq!(table.resolve(SizeClass::Medium, 0.0), 10.0);
    }

    #[test]
    fn deserializes_scalar_form_as_default() {
        let table: PerSize<f64> = serde_json::from_str("0.3").unwrap();
        assert_eq!(table, PerSize::uniform(0.3));
    }

    #[test]
    fn day_unit_table_accepts_strings_and_pairs() {
        let table: PerSize<DayUnit> =
            serde_json::from_str(r#"{"small": "d", "default": [" day", " days"]}"#).unwrap();
        assert_eq!(
            table.resolve(SizeClass::Small, DayUnit::from("x")),
            DayUnit::from("d")
        );
        assert_eq!(
            table.resolve(SizeClass::Large, DayUnit::from("x")),
            DayUnit::pair(" day", " days")
        );
    }

    #[test]
    fn day_unit_plural_for_zero_and_many() {
        let unit = DayUnit::pair("day", "days");
        assert_eq!(unit.for_days(0), "days");
        assert_eq!(unit.for_days(1), "day");
        assert_eq!(unit.for_days(2), "days");
    }
}
