//! Canvas and row sizing.
//!
//! The widget is a title block above a canvas holding one text row per
//! birthday. [`LayoutPlan::compute`] derives every dimension from the number
//! of rows and the settings resolved for a [`SizeClass`], so that the rows and
//! the gaps between them exactly fill the canvas below the title spacing.

use nextbday_config::{SizeClass, SizedSettings};

/// Width and height in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Insets around the widget content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    /// Top inset; may be negative to pull the title up into its leading.
    pub top: f64,
    /// Right inset.
    pub right: f64,
    /// Bottom inset.
    pub bottom: f64,
    /// Left inset.
    pub left: f64,
}

/// The nominal size of the widget for a size class, before padding and title.
///
/// # Examples
///
/// ```
/// use nextbday_config::SizeClass;
/// use nextbday_layout::plan::{Size, nominal_canvas};
///
/// assert_eq!(nominal_canvas(SizeClass::Small), Size::new(169.0, 169.0));
/// assert_eq!(nominal_canvas(SizeClass::Large), Size::new(360.0, 376.0));
/// ```
#[must_use]
pub const fn nominal_canvas(size: SizeClass) -> Size {
    match size {
        SizeClass::Small => Size::new(169.0, 169.0),
        SizeClass::Medium => Size::new(360.0, 169.0),
        SizeClass::Large => Size::new(360.0, 376.0),
        SizeClass::ExtraLarge => Size::new(801.0, 376.0),
        SizeClass::AccessoryRectangular => Size::new(420.0, 169.0),
    }
}

/// Every dimension needed to place the title and the rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPlan {
    /// Size of the row canvas.
    pub canvas: Size,
    /// Font size of the title; `0` hides it.
    pub title_size: f64,
    /// Space reserved at the top of the canvas below the title.
    pub title_spacing: f64,
    /// Font size of each row.
    pub row_text_size: f64,
    /// Gap between consecutive rows.
    pub row_spacing: f64,
    /// Row gap relative to the text size.
    pub vertical_spacing: f64,
    /// Widget insets.
    pub padding: Padding,
    /// Space left empty at the bottom of the canvas.
    pub bottom_gutter: f64,
    /// Number of rows the plan was computed for.
    pub rows: usize,
}

impl LayoutPlan {
    /// Computes the plan for `rows` entries.
    ///
    /// `default_text_size` is used when there are no rows at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use nextbday_config::{Settings, SizeClass};
    /// use nextbday_layout::LayoutPlan;
    ///
    /// let sized = Settings::default().resolve(SizeClass::Large);
    /// let plan = LayoutPlan::compute(8, &sized, 20.0);
    ///
    /// let used = plan.title_spacing + 8.0 * plan.row_text_size + 7.0 * plan.row_spacing;
    /// assert!((used - plan.content_height()).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn compute(rows: usize, sized: &SizedSettings, default_text_size: f64) -> Self {
        let pad = sized.padding;
        let title_size = sized.title_size;
        let vertical_spacing = sized.vertical_spacing;
        let title_spacing = title_size * vertical_spacing;

        let padding = Padding {
            top: pad - 0.25 * title_size,
            right: pad,
            bottom: 0.0,
            left: pad,
        };

        let nominal = nominal_canvas(sized.size);
        let canvas = Size::new(
            non_negative(nominal.width - 2.0 * pad),
            non_negative(nominal.height - 2.0 * title_size - padding.top),
        );
        let bottom_gutter = pad;
        let content_height = non_negative(canvas.height - bottom_gutter);

        let (row_text_size, row_spacing) = if rows == 0 {
            (default_text_size, 0.0)
        } else {
            let n = rows as f64;
            let denominator = n + (n - 1.0) * vertical_spacing;
            let text_size = if denominator > 0.0 {
                non_negative((content_height - title_spacing) / denominator)
            } else {
                default_text_size
            };
            (text_size, text_size * vertical_spacing)
        };

        Self {
            canvas,
            title_size,
            title_spacing,
            row_text_size,
            row_spacing,
            vertical_spacing,
            padding,
            bottom_gutter,
            rows,
        }
    }

    /// Height available to the title spacing and the rows.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        non_negative(self.canvas.height - self.bottom_gutter)
    }

    /// Vertical distance between the tops of two consecutive rows.
    #[must_use]
    pub fn row_pitch(&self) -> f64 {
        self.row_text_size + self.row_spacing
    }

    /// Top edge of row `index` within the canvas.
    #[must_use]
    pub fn row_y(&self, index: usize) -> f64 {
        index as f64 * self.row_pitch() + self.title_spacing
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use nextbday_config::DayUnit;
    use proptest::prelude::*;

    fn size_class() -> impl Strategy<Value = SizeClass> {
        prop::sample::select(SizeClass::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn rows_fill_the_content_height(
            size in size_class(),
            rows in 1usize..20,
            padding in 0.0f64..20.0,
            title_size in 0.0f64..30.0,
            vertical_spacing in 0.0f64..1.0,
        ) {
            let sized = SizedSettings {
                size,
                padding,
                vertical_spacing,
                title_size,
                column_spacing: 10.0,
                entries: rows,
                day_unit: DayUnit::from("d"),
            };
            let plan = LayoutPlan::compute(rows, &sized, 20.0);
            let n = rows as f64;
            let used = plan.title_spacing + n * plan.row_text_size + (n - 1.0) * plan.row_spacing;
            prop_assert!((used - plan.content_height()).abs() < 1e-6);
        }

        #[test]
        fn dimensions_are_never_negative(
            size in size_class(),
            rows in 0usize..50,
            padding in 0.0f64..500.0,
            title_size in 0.0f64..500.0,
            vertical_spacing in 0.0f64..5.0,
        ) {
            let sized = SizedSettings {
                size,
                padding,
                vertical_spacing,
                title_size,
                column_spacing: 10.0,
                entries: rows,
                day_unit: DayUnit::from("d"),
            };
            let plan = LayoutPlan::compute(rows, &sized, 20.0);
            prop_assert!(plan.canvas.width >= 0.0);
            prop_assert!(plan.canvas.height >= 0.0);
            prop_assert!(plan.row_text_size >= 0.0);
            prop_assert!(plan.row_spacing >= 0.0);
        }
    }
}
