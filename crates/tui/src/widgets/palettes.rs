//! The palette overview.
//!
//! Lists every curated background color on its own background, so a color
//! can be picked for the `background_color` setting.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{PALETTES, Palette, Rgb};

/// Lines needed to list every palette: a heading per palette, one line per
/// color, and a blank line between palettes.
#[must_use]
pub fn palettes_height() -> u16 {
    let lines: usize = PALETTES.iter().map(|p| p.colors.len() + 1).sum::<usize>()
        + PALETTES.len().saturating_sub(1);
    u16::try_from(lines).unwrap_or(u16::MAX)
}

fn palette_lines(palette: &Palette, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        palette.name.to_uppercase(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for &(name, hex) in palette.colors {
        let Ok(rgb) = hex.parse::<Rgb>() else {
            continue;
        };
        let style = Style::default().fg(rgb.text_color()).bg(rgb.into());
        let label = format!(" {name:<24}{hex}");
        lines.push(Line::from(Span::styled(format!("{label:<width$}"), style)));
    }
    lines
}

/// Renders every palette into `area`.
///
/// # Examples
///
/// ```
/// use nextbday_tui::widgets::{palettes_height, render_palettes};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 40, palettes_height());
/// let mut buf = Buffer::empty(area);
/// render_palettes(area, &mut buf);
/// ```
pub fn render_palettes(area: Rect, buf: &mut Buffer) {
    let width = usize::from(area.width);
    let mut lines = Vec::new();
    for (i, palette) in PALETTES.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(palette_lines(palette, width));
    }
    Paragraph::new(lines).render(area, buf);
}
