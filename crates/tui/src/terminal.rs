//! Printing rendered panels to the terminal.
//!
//! The panel is not an interactive screen: it is rendered once into an
//! off-screen [`Buffer`] and then written to standard output with ANSI styles,
//! like the output of any other command.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{
        Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
    text::Span,
};

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to query the terminal.
    #[error("failed to query terminal size: {0}")]
    Size(#[source] io::Error),

    /// Failed to write the panel.
    #[error("failed to print panel: {0}")]
    Print(#[source] io::Error),
}

/// Width of the terminal in columns, or `None` when output is not a terminal.
#[must_use]
pub fn terminal_width() -> Option<u16> {
    crossterm::terminal::size().ok().map(|(columns, _)| columns)
}

/// Renders into a fresh buffer of `width` × `height` cells.
pub fn render_to_buffer(width: u16, height: u16, render: impl FnOnce(Rect, &mut Buffer)) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render(area, &mut buf);
    buf
}

/// Writes `buf` to `out`, one line per buffer row.
///
/// # Errors
///
/// Returns an error if writing fails.
///
/// # Examples
///
/// ```
/// use nextbday_tui::terminal::{print_buffer, render_to_buffer};
/// use ratatui::style::Style;
///
/// let buf = render_to_buffer(5, 1, |area, buf| {
///     buf.set_string(area.x, area.y, "hello", Style::default());
/// });
///
/// let mut out = Vec::new();
/// print_buffer(&buf, &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("hello"));
/// ```
pub fn print_buffer(buf: &Buffer, out: &mut impl Write) -> Result<(), TerminalError> {
    write_buffer(buf, out).map_err(TerminalError::Print)
}

fn write_buffer(buf: &Buffer, out: &mut impl Write) -> io::Result<()> {
    let area = buf.area;
    for y in area.top()..area.bottom() {
        let mut skip = 0;
        for x in area.left()..area.right() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let Some(cell) = buf.cell((x, y)) else {
                continue;
            };
            queue!(
                out,
                SetForegroundColor(term_color(cell.fg)),
                SetBackgroundColor(term_color(cell.bg)),
                SetAttribute(if cell.modifier.contains(Modifier::BOLD) {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                }),
                Print(cell.symbol()),
            )?;
            skip = Span::raw(cell.symbol()).width().saturating_sub(1);
        }
        queue!(out, SetAttribute(Attribute::Reset), ResetColor, Print("\n"))?;
    }
    out.flush()
}

/// Maps a ratatui color to the crossterm color the crossterm backend uses.
fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}
