//! Widget settings and their per-size resolution.
//!
//! This module provides the [`Settings`] struct, an immutable value that is
//! threaded through the layout pipeline, and [`SizedSettings`], the constants
//! resolved for one presentation size.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_settings_file, read_json5_file, write_json_file};
use crate::size::{DayUnit, PerSize, SizeClass};

/// Hard fallback for the widget padding.
pub const FALLBACK_PADDING: f64 = 10.0;
/// Hard fallback for the vertical spacing ratio.
pub const FALLBACK_VERTICAL_SPACING: f64 = 0.5;
/// Hard fallback for the title size.
pub const FALLBACK_TITLE_SIZE: f64 = 26.0;
/// Hard fallback for the spacing between text columns.
pub const FALLBACK_COLUMN_SPACING: f64 = 10.0;
/// Hard fallback for the number of displayed birthdays.
pub const FALLBACK_ENTRIES: usize = 8;
/// Hard fallback for the day unit.
pub const FALLBACK_DAY_UNIT: &str = "d";

/// Horizontal alignment of the widget title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleAlignment {
    /// Flush left.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush right.
    Right,
}

/// Font family names for the three text weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontFamilies {
    /// Used for the title.
    pub regular: String,
    /// Used for the days-until column.
    pub bold: String,
    /// Used for the age and name columns.
    pub light: String,
}

impl Default for FontFamilies {
    fn default() -> Self {
        Self {
            regular: "Helvetica".to_string(),
            bold: "Helvetica-Bold".to_string(),
            light: "Helvetica-Light".to_string(),
        }
    }
}

/// Settings of the birthday widget.
///
/// Every field has a default, so a settings file only needs to list the
/// values it changes.
///
/// # Examples
///
/// ```
/// use nextbday_config::{Settings, SizeClass};
///
/// let settings = Settings::default();
/// assert!(settings.validate().is_ok());
///
/// let small = settings.resolve(SizeClass::Small);
/// assert_eq!(small.title_size, 12.0);
/// assert_eq!(small.entries, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Title text shown above the list.
    pub title: String,

    /// Alignment of the title.
    pub title_alignment: TitleAlignment,

    /// Background color as `#RRGGBB`.
    pub background_color: String,

    /// Font families per weight.
    pub font_families: FontFamilies,

    /// Marker appended to truncated names.
    pub text_overflow_char: String,

    /// Replacement labels for specific day counts, keyed by the count.
    ///
    /// The default shows a party popper instead of `0d`.
    pub date_replacements: BTreeMap<String, String>,

    /// Unit appended to day counts.
    pub day_unit: PerSize<DayUnit>,

    /// Title font size; `0` hides the title.
    pub title_size: PerSize<f64>,

    /// Row text size used when there is no birthday to show.
    pub default_text_size: f64,

    /// Horizontal gap between the text columns.
    pub text_column_spacing: PerSize<f64>,

    /// Vertical gap between rows, relative to the text size.
    pub vertical_text_spacing: PerSize<f64>,

    /// Number of birthdays shown.
    pub entries_per_size: PerSize<usize>,

    /// Gutter around the widget content.
    pub widget_padding: PerSize<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "🎁 Next Birthdays 🎁".to_string(),
            title_alignment: TitleAlignment::Center,
            background_color: "#14213D".to_string(),
            font_families: FontFamilies::default(),
            text_overflow_char: "…".to_string(),
            date_replacements: BTreeMap::from([("0".to_string(), "🎉".to_string())]),
            day_unit: PerSize::uniform(DayUnit::from("d")),
            title_size: PerSize::from_entries([
                ("accessoryRectangular", 0.0),
                ("small", 12.0),
                ("medium", 18.0),
                ("default", 26.0),
            ]),
            default_text_size: 20.0,
            text_column_spacing: PerSize::from_entries([("small", 4.0), ("default", 10.0)]),
            vertical_text_spacing: PerSize::from_entries([
                ("small", 0.7),
                ("medium", 0.3),
                ("default", 0.7),
            ]),
            entries_per_size: PerSize::from_entries([
                ("accessoryRectangular", 3),
                ("small", 6),
                ("medium", 5),
                ("default", 8),
            ]),
            widget_padding: PerSize::from_entries([
                ("accessoryRectangular", 0.0),
                ("small", 3.0),
                ("medium", 7.0),
                ("default", 10.0),
            ]),
        }
    }
}

/// Settings resolved for one presentation size.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedSettings {
    /// The size these values were resolved for.
    pub size: SizeClass,
    /// Gutter around the content.
    pub padding: f64,
    /// Row gap relative to text size.
    pub vertical_spacing: f64,
    /// Title font size.
    pub title_size: f64,
    /// Gap between text columns.
    pub column_spacing: f64,
    /// Number of birthdays shown.
    pub entries: usize,
    /// Unit appended to day counts.
    pub day_unit: DayUnit,
}

impl Settings {
    /// Creates the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from the default file locations.
    ///
    /// Returns the defaults when no settings file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file is found but cannot be read,
    /// parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_settings_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads settings from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let settings: Settings = read_json5_file(path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Saves the settings as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_json_file(path, self)
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the background color is not `#RRGGBB`, the
    /// overflow marker is empty, a size or spacing is negative or not finite,
    /// or a date replacement key is not a plain day count such as `"1"`.
    pub fn validate(&self) -> Result<()> {
        if !is_hex_color(&self.background_color) {
            return Err(ConfigError::InvalidColor(self.background_color.clone()));
        }

        if self.text_overflow_char.is_empty() {
            return Err(ConfigError::InvalidSetting {
                field: "text_overflow_char",
                reason: "must not be empty".to_string(),
            });
        }

        check_length("default_text_size", self.default_text_size)?;
        for (field, table) in [
            ("title_size", &self.title_size),
            ("text_column_spacing", &self.text_column_spacing),
            ("vertical_text_spacing", &self.vertical_text_spacing),
            ("widget_padding", &self.widget_padding),
        ] {
            for &value in table.values() {
                check_length(field, value)?;
            }
        }

        for key in self.date_replacements.keys() {
            // keys must be canonical, lookups format the count with `to_string`
            let canonical = key.parse::<u32>().is_ok_and(|days| days.to_string() == *key);
            if !canonical {
                return Err(ConfigError::InvalidSetting {
                    field: "date_replacements",
                    reason: format!("key '{key}' is not a day count"),
                });
            }
        }

        Ok(())
    }

    /// Resolves every per-size value for `size`.
    #[must_use]
    pub fn resolve(&self, size: SizeClass) -> SizedSettings {
        SizedSettings {
            size,
            padding: self.widget_padding.resolve(size, FALLBACK_PADDING),
            vertical_spacing: self
                .vertical_text_spacing
                .resolve(size, FALLBACK_VERTICAL_SPACING),
            title_size: self.title_size.resolve(size, FALLBACK_TITLE_SIZE),
            column_spacing: self
                .text_column_spacing
                .resolve(size, FALLBACK_COLUMN_SPACING),
            entries: self.entries_per_size.resolve(size, FALLBACK_ENTRIES),
            day_unit: self
                .day_unit
                .resolve(size, DayUnit::from(FALLBACK_DAY_UNIT)),
        }
    }

    /// The replacement label for a day count, if one is configured.
    #[must_use]
    pub fn date_replacement(&self, days: u32) -> Option<&str> {
        self.date_replacements
            .get(&days.to_string())
            .map(String::as_str)
    }
}

/// Whether `value` is a `#RRGGBB` color.
fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn check_length(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSetting {
            field,
            reason: format!("{value} is not a non-negative number"),
        })
    }
}
