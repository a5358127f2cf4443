//! The error panel.
//!
//! Shown instead of the birthday list when it cannot be produced. Errors the
//! user can fix are drawn in the warning color, the others in red.

use nextbday_protocol::BirthdayError;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::Theme;

/// Title of the error panel.
pub const ERROR_TITLE: &str = "Oh snap!";

/// The message explaining `error` to the user.
///
/// # Examples
///
/// ```
/// use nextbday_protocol::BirthdayError;
/// use nextbday_tui::widgets::error_message;
///
/// assert_eq!(error_message(&BirthdayError::NoContacts), "👀 No contacts could be found…");
/// ```
#[must_use]
pub fn error_message(error: &BirthdayError) -> String {
    match error {
        BirthdayError::NoCacheFile { .. } => "🏗 There is one last thing… Run nextbday once with \
             --refresh --contacts <file.vcf> to read your birthdays. Thanks! 🙏"
            .to_string(),
        BirthdayError::NoContacts => "👀 No contacts could be found…".to_string(),
        BirthdayError::ContactsAccessDenied => "😢 Couldn't read your contacts. Make sure \
             the contacts file exists and is readable by your user."
            .to_string(),
        BirthdayError::Unexpected { message } => format!("🫣 Unexpected error: {message}"),
    }
}

/// The color the panel is drawn in.
#[must_use]
pub fn error_color(error: &BirthdayError, theme: &Theme) -> Color {
    if error.is_critical() {
        theme.critical()
    } else {
        theme.warning()
    }
}

/// Lines needed to show the panel `width` columns wide.
#[must_use]
pub fn error_panel_height(error: &BirthdayError, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let message_width = Span::raw(error_message(error)).width();
    // one extra line absorbs word-wrap slack
    let message_rows = message_width.div_ceil(width) + 1;
    u16::try_from(message_rows).unwrap_or(u16::MAX).saturating_add(2)
}

/// Renders the error panel, centered in `area`.
///
/// # Examples
///
/// ```
/// use nextbday_protocol::BirthdayError;
/// use nextbday_tui::Theme;
/// use nextbday_tui::widgets::render_error;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 40, 6);
/// let mut buf = Buffer::empty(area);
/// render_error(&BirthdayError::NoContacts, &Theme::default(), area, &mut buf);
/// ```
pub fn render_error(error: &BirthdayError, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let style = Style::default()
        .fg(error_color(error, theme))
        .bg(theme.background.into());
    buf.set_style(area, style);

    let lines = vec![
        Line::from(ERROR_TITLE),
        Line::from(""),
        Line::from(error_message(error)),
    ];

    Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
