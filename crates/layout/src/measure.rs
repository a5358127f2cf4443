//! Text measurement.
//!
//! Glyph metrics belong to whatever draws the widget, so the layout engine
//! only sees them through [`TextMeasurer`].

use std::future::Future;

use nextbday_config::FontFamilies;

use crate::error::{LayoutError, Result};

/// Font weight of a text column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    /// Regular weight; used for titles.
    #[default]
    Regular,
    /// Bold weight; used for the days-until column.
    Bold,
    /// Light weight; used for the age and name columns.
    Light,
}

/// Family, size and weight of the font a text is measured in.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Font family name, e.g. `Helvetica-Bold`.
    pub family: String,
    /// Font size in points.
    pub size: f64,
    /// Font weight.
    pub weight: FontWeight,
}

impl FontSpec {
    /// Creates a font spec.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f64, weight: FontWeight) -> Self {
        Self {
            family: family.into(),
            size,
            weight,
        }
    }

    /// The configured family for `weight`, at `size` points.
    ///
    /// # Examples
    ///
    /// ```
    /// use nextbday_config::FontFamilies;
    /// use nextbday_layout::{FontSpec, FontWeight};
    ///
    /// let font = FontSpec::from_families(&FontFamilies::default(), 14.0, FontWeight::Bold);
    /// assert_eq!(font.family, "Helvetica-Bold");
    /// assert_eq!(font.size, 14.0);
    /// ```
    #[must_use]
    pub fn from_families(families: &FontFamilies, size: f64, weight: FontWeight) -> Self {
        let family = match weight {
            FontWeight::Regular => &families.regular,
            FontWeight::Bold => &families.bold,
            FontWeight::Light => &families.light,
        };
        Self::new(family.as_str(), size, weight)
    }
}

/// Measures rendered text widths.
///
/// Implementations must return exactly one width per input text, in input
/// order.
pub trait TextMeasurer {
    /// Measures `texts` rendered in `font`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Measurement`] if the engine fails.
    fn measure(
        &self,
        texts: &[String],
        font: FontSpec,
    ) -> impl Future<Output = Result<Vec<f64>>> + Send;
}

/// Measures `texts` and checks that one width came back per text.
///
/// # Errors
///
/// Returns the measurer's error, or [`LayoutError::WidthCount`] when the
/// result has the wrong length.
pub async fn measure_all<M>(measurer: &M, texts: &[String], font: FontSpec) -> Result<Vec<f64>>
where
    M: TextMeasurer + Sync + ?Sized,
{
    let widths = measurer.measure(texts, font).await?;
    if widths.len() == texts.len() {
        Ok(widths)
    } else {
        Err(LayoutError::WidthCount {
            expected: texts.len(),
            actual: widths.len(),
        })
    }
}

/// The widest of `widths`, or `0` when empty.
#[must_use]
pub fn max_width(widths: &[f64]) -> f64 {
    widths.iter().copied().fold(0.0, f64::max)
}
