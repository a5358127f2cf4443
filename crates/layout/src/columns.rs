//! The three text columns of the birthday list.
//!
//! Each row shows how many days are left, the age, and the name. Column
//! widths are the widest measured label of each column; the name column gets
//! whatever width remains and long names are truncated to fit it.

use nextbday_config::{DayUnit, FontFamilies, Settings};
use nextbday_protocol::EnrichedEntry;
use tracing::debug;

use crate::error::Result;
use crate::measure::{FontSpec, FontWeight, TextMeasurer, max_width, measure_all};
use crate::truncate::truncate_measured;

/// The days-until label: a configured replacement, or the count and unit.
///
/// # Examples
///
/// ```
/// use nextbday_config::{DayUnit, FontFamilies, Settings};
/// use nextbday_layout::columns::until_label;
///
/// let settings = Settings::default();
/// let unit = DayUnit::pair(" day", " days");
///
/// assert_eq!(until_label(0, &settings, &unit), "🎉");
/// assert_eq!(until_label(1, &settings, &unit), "1 day");
/// assert_eq!(until_label(12, &settings, &unit), "12 days");
/// ```
#[must_use]
pub fn until_label(date_diff: u32, settings: &Settings, unit: &DayUnit) -> String {
    match settings.date_replacement(date_diff) {
        Some(replacement) => replacement.to_string(),
        None => format!("{date_diff}{}", unit.for_days(date_diff)),
    }
}

/// The age label, e.g. `(42)`.
#[must_use]
pub fn age_label(age: i32) -> String {
    format!("({age})")
}

/// Labels of every row, one vector per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowLabels {
    /// Days-until column.
    pub until: Vec<String>,
    /// Age column.
    pub ages: Vec<String>,
    /// Name column, before truncation.
    pub names: Vec<String>,
}

impl RowLabels {
    /// Builds the labels for `entries`.
    #[must_use]
    pub fn new(entries: &[EnrichedEntry], settings: &Settings, unit: &DayUnit) -> Self {
        Self {
            until: entries
                .iter()
                .map(|e| until_label(e.date_diff, settings, unit))
                .collect(),
            ages: entries.iter().map(|e| age_label(e.age)).collect(),
            names: entries.iter().map(|e| e.record.display_name()).collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.until.len()
    }

    /// Whether there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.until.is_empty()
    }
}

/// Horizontal placement of the columns, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Left edge of the days-until column.
    pub until_x: f64,
    /// Widest days-until label.
    pub until_width: f64,
    /// Left edge of the age column.
    pub ages_x: f64,
    /// Widest age label.
    pub ages_width: f64,
    /// Left edge of the name column.
    pub names_x: f64,
    /// Width left for names; may be negative when the other columns overflow.
    pub names_width: f64,
    /// Names, truncated to `names_width`.
    pub names: Vec<String>,
}

impl ColumnLayout {
    /// Measures the labels and places the columns on a canvas `canvas_width`
    /// wide.
    ///
    /// The three columns are measured concurrently: days-until in the bold
    /// family, ages and names in the light family. Names wider than the
    /// remaining space are truncated.
    ///
    /// # Errors
    ///
    /// Returns the first measurement error; no partial layout is produced.
    pub async fn measure<M>(
        measurer: &M,
        labels: &RowLabels,
        fonts: &FontFamilies,
        text_size: f64,
        canvas_width: f64,
        column_spacing: f64,
        overflow: &str,
    ) -> Result<Self>
    where
        M: TextMeasurer + Sync + ?Sized,
    {
        let bold = FontSpec::from_families(fonts, text_size, FontWeight::Bold);
        let light = FontSpec::from_families(fonts, text_size, FontWeight::Light);

        let (until_widths, age_widths, name_widths) = tokio::try_join!(
            measure_all(measurer, &labels.until, bold),
            measure_all(measurer, &labels.ages, light.clone()),
            measure_all(measurer, &labels.names, light.clone()),
        )?;

        let until_x = 0.0;
        let until_width = max_width(&until_widths);
        let ages_x = until_x + until_width + column_spacing;
        let ages_width = max_width(&age_widths);
        let names_x = ages_x + ages_width + column_spacing;
        let names_width = canvas_width - names_x;
        debug!(until_width, ages_width, names_x, names_width, "placed columns");

        let mut names = Vec::with_capacity(labels.names.len());
        for (name, &width) in labels.names.iter().zip(&name_widths) {
            names.push(
                truncate_measured(measurer, name, width, names_width, overflow, light.clone())
                    .await?,
            );
        }

        Ok(Self {
            until_x,
            until_width,
            ages_x,
            ages_width,
            names_x,
            names_width,
            names,
        })
    }
}
