//! Test utilities for the TUI crate.

use ratatui::buffer::Buffer;
use ratatui::text::Span;

/// Converts a ratatui [`Buffer`] to a string, one line per row.
///
/// Cells covered by a preceding wide symbol are skipped, and trailing
/// whitespace is trimmed from each line for cleaner snapshots.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        let mut skip = 0;
        for x in 0..buf.area.width {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            if let Some(cell) = buf.cell((buf.area.x + x, buf.area.y + y)) {
                result.push_str(cell.symbol());
                skip = Span::raw(cell.symbol()).width().saturating_sub(1);
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}
