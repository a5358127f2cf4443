//! Widget composition.
//!
//! [`compose`] runs the whole pipeline for one render pass: select the next
//! birthdays, attach day counts and ages, size the canvas, measure and place
//! the columns, and emit positioned text boxes for the renderer.

use chrono::NaiveDate;
use nextbday_config::{FontFamilies, Settings, SizeClass, TitleAlignment};
use nextbday_protocol::metrics::enrich;
use nextbday_protocol::{EnrichedEntry, SortedBirthdays, select_next};
use tracing::{debug, instrument};

use crate::columns::{ColumnLayout, RowLabels};
use crate::error::{LayoutError, Result};
use crate::measure::{FontSpec, FontWeight, TextMeasurer};
use crate::plan::LayoutPlan;

/// Horizontal alignment of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

impl From<TitleAlignment> for Alignment {
    fn from(alignment: TitleAlignment) -> Self {
        match alignment {
            TitleAlignment::Left => Self::Left,
            TitleAlignment::Center => Self::Center,
            TitleAlignment::Right => Self::Right,
        }
    }
}

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// A text drawn inside a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    /// The text.
    pub text: String,
    /// Where to draw it.
    pub rect: Rect,
    /// Alignment inside `rect`.
    pub alignment: Alignment,
    /// Font family, size and weight.
    pub font: FontSpec,
}

/// One birthday row.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRow {
    /// Days until the birthday, right-aligned.
    pub until: TextBox,
    /// Age, centered.
    pub age: TextBox,
    /// Name, left-aligned and possibly truncated.
    pub name: TextBox,
}

/// The title above the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    /// Title text.
    pub text: String,
    /// Regular-weight font at the title size.
    pub font: FontSpec,
    /// Alignment across the widget width.
    pub alignment: Alignment,
}

/// Everything the renderer needs to draw the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetLayout {
    /// Sizes and spacings.
    pub plan: LayoutPlan,
    /// The title, absent when its size resolves to zero.
    pub title: Option<Title>,
    /// Column placement.
    pub columns: ColumnLayout,
    /// Positioned rows, in display order.
    pub rows: Vec<DrawRow>,
    /// The birthdays shown, in display order.
    pub entries: Vec<EnrichedEntry>,
}

/// Lays out the next birthdays after `today` for a widget of the given size.
///
/// # Errors
///
/// Returns [`LayoutError::NoEntries`] when there is nothing to show, or the
/// measurer's error.
#[instrument(skip(birthdays, settings, measurer), fields(birthdays = birthdays.len()))]
pub async fn compose<M>(
    birthdays: &SortedBirthdays,
    today: NaiveDate,
    size: SizeClass,
    settings: &Settings,
    measurer: &M,
) -> Result<WidgetLayout>
where
    M: TextMeasurer + Sync + ?Sized,
{
    let sized = settings.resolve(size);
    let selected = select_next(birthdays, today, sized.entries);
    if selected.is_empty() {
        return Err(LayoutError::NoEntries);
    }

    let entries = enrich(selected, today);
    let plan = LayoutPlan::compute(entries.len(), &sized, settings.default_text_size);
    debug!(
        rows = plan.rows,
        text_size = plan.row_text_size,
        width = plan.canvas.width,
        height = plan.canvas.height,
        "computed layout plan"
    );

    let labels = RowLabels::new(&entries, settings, &sized.day_unit);
    let columns = ColumnLayout::measure(
        measurer,
        &labels,
        &settings.font_families,
        plan.row_text_size,
        plan.canvas.width,
        sized.column_spacing,
        &settings.text_overflow_char,
    )
    .await?;

    let rows = draw_rows(&plan, &columns, &labels, &settings.font_families);
    let title = (plan.title_size > 0.0).then(|| Title {
        text: settings.title.clone(),
        font: FontSpec::from_families(
            &settings.font_families,
            plan.title_size,
            FontWeight::Regular,
        ),
        alignment: settings.title_alignment.into(),
    });

    Ok(WidgetLayout {
        plan,
        title,
        columns,
        rows,
        entries,
    })
}

/// Positions every row of `labels` according to `plan` and `columns`.
#[must_use]
pub fn draw_rows(
    plan: &LayoutPlan,
    columns: &ColumnLayout,
    labels: &RowLabels,
    fonts: &FontFamilies,
) -> Vec<DrawRow> {
    let bold = FontSpec::from_families(fonts, plan.row_text_size, FontWeight::Bold);
    let light = FontSpec::from_families(fonts, plan.row_text_size, FontWeight::Light);
    let height = plan.row_pitch();

    (0..labels.len())
        .map(|i| {
            let y = plan.row_y(i);
            DrawRow {
                until: TextBox {
                    text: labels.until[i].clone(),
                    rect: Rect {
                        x: columns.until_x,
                        y,
                        width: columns.until_width + 1.0,
                        height,
                    },
                    alignment: Alignment::Right,
                    font: bold.clone(),
                },
                age: TextBox {
                    text: labels.ages[i].clone(),
                    rect: Rect {
                        x: columns.ages_x,
                        y,
                        width: columns.ages_width + 1.0,
                        height,
                    },
                    alignment: Alignment::Center,
                    font: light.clone(),
                },
                name: TextBox {
                    text: columns.names.get(i).cloned().unwrap_or_default(),
                    rect: Rect {
                        x: columns.names_x,
                        y,
                        width: columns.names_width + 1.0,
                        height,
                    },
                    alignment: Alignment::Left,
                    font: light.clone(),
                },
            }
        })
        .collect()
}
