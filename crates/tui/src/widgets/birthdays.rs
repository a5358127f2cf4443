//! The birthday list panel.
//!
//! Renders a [`WidgetLayout`] into a buffer: the title on the first line, a
//! blank line, then one line per birthday with the three columns placed at
//! the cell positions of their layout rectangles.

use nextbday_layout::{Alignment as TextAlignment, FontWeight, TextBox, WidgetLayout};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};

use crate::measure::CellMeasurer;
use crate::theme::Theme;

/// Lines taken by the title and the gap below it.
pub const TITLE_ROWS: u16 = 2;

/// Converts a layout alignment to a ratatui alignment.
#[must_use]
pub fn alignment(alignment: TextAlignment) -> Alignment {
    match alignment {
        TextAlignment::Left => Alignment::Left,
        TextAlignment::Center => Alignment::Center,
        TextAlignment::Right => Alignment::Right,
    }
}

/// The number of columns and lines needed to draw `layout`.
#[must_use]
pub fn panel_size(layout: &WidgetLayout, measurer: &CellMeasurer) -> (u16, u16) {
    let plan = &layout.plan;
    let width = measurer.cells(plan.padding.left + plan.canvas.width + plan.padding.right);
    let title_rows = if layout.title.is_some() { TITLE_ROWS } else { 0 };
    let rows = u16::try_from(layout.rows.len()).unwrap_or(u16::MAX);
    (width, title_rows.saturating_add(rows))
}

/// Renders the birthday list.
///
/// Rows that do not fit in `area` are dropped.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nextbday_config::{Settings, SizeClass};
/// use nextbday_layout::compose;
/// use nextbday_protocol::dummy::dummy_birthdays;
/// use nextbday_tui::widgets::{panel_size, render_birthdays};
/// use nextbday_tui::{CellMeasurer, Theme};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let measurer = CellMeasurer::default();
/// let today = NaiveDate::from_ymd_opt(2024, 12, 9).unwrap();
/// let layout = compose(&dummy_birthdays(), today, SizeClass::Large, &Settings::default(), &measurer)
///     .await
///     .unwrap();
///
/// let (width, height) = panel_size(&layout, &measurer);
/// let area = Rect::new(0, 0, width, height);
/// let mut buf = Buffer::empty(area);
/// render_birthdays(&layout, &Theme::default(), &measurer, area, &mut buf);
/// # });
/// ```
pub fn render_birthdays(
    layout: &WidgetLayout,
    theme: &Theme,
    measurer: &CellMeasurer,
    area: Rect,
    buf: &mut Buffer,
) {
    let base = Style::default()
        .fg(theme.text())
        .bg(theme.background.into());
    buf.set_style(area, base);

    let left = measurer.cells(layout.plan.padding.left).min(area.width);
    let right = measurer.cells(layout.plan.padding.right);
    let inner = Rect {
        x: area.x + left,
        y: area.y,
        width: area.width.saturating_sub(left.saturating_add(right)),
        height: area.height,
    };

    let mut y = inner.y;
    if let Some(title) = &layout.title {
        if y < area.bottom() {
            Paragraph::new(title.text.as_str())
                .style(base)
                .alignment(alignment(title.alignment))
                .render(Rect::new(inner.x, y, inner.width, 1), buf);
        }
        y = y.saturating_add(TITLE_ROWS);
    }

    for row in &layout.rows {
        if y >= area.bottom() {
            break;
        }
        for text_box in [&row.until, &row.age, &row.name] {
            render_text_box(text_box, inner, y, measurer, base, buf);
        }
        y += 1;
    }
}

/// Draws one text box on line `y`, clipped to `inner`.
fn render_text_box(
    text_box: &TextBox,
    inner: Rect,
    y: u16,
    measurer: &CellMeasurer,
    base: Style,
    buf: &mut Buffer,
) {
    let x = inner.x.saturating_add(measurer.cells(text_box.rect.x));
    if x >= inner.right() {
        return;
    }
    let width = measurer.cells(text_box.rect.width).min(inner.right() - x);
    if width == 0 {
        return;
    }

    let style = match text_box.font.weight {
        FontWeight::Bold => base.add_modifier(Modifier::BOLD),
        FontWeight::Regular | FontWeight::Light => base,
    };
    Paragraph::new(text_box.text.as_str())
        .style(style)
        .alignment(alignment(text_box.alignment))
        .render(Rect::new(x, y, width, 1), buf);
}
