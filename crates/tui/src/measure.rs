//! Text measurement in terminal cells.

use nextbday_layout::{FontSpec, Result, TextMeasurer};
use ratatui::text::Span;

/// Default number of layout points per terminal cell.
pub const DEFAULT_CELL_WIDTH: f64 = 8.0;

/// Measures text by its display width in terminal cells.
///
/// Font family, size and weight do not change the width of text in a
/// terminal; every cell is `cell_width` points wide.
///
/// # Examples
///
/// ```
/// use nextbday_tui::CellMeasurer;
///
/// let measurer = CellMeasurer::default();
/// assert_eq!(measurer.width("Ada"), 24.0);
/// assert_eq!(measurer.cells(24.9), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMeasurer {
    cell_width: f64,
}

impl CellMeasurer {
    /// Creates a measurer with the given number of points per cell.
    #[must_use]
    pub fn new(cell_width: f64) -> Self {
        Self { cell_width }
    }

    /// Points per cell.
    #[must_use]
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Width of `text` in points.
    #[must_use]
    pub fn width(&self, text: &str) -> f64 {
        Span::raw(text).width() as f64 * self.cell_width
    }

    /// Number of whole cells covered by `points`, never negative.
    #[must_use]
    pub fn cells(&self, points: f64) -> u16 {
        if self.cell_width <= 0.0 || !points.is_finite() || points <= 0.0 {
            return 0;
        }
        (points / self.cell_width).floor().min(f64::from(u16::MAX)) as u16
    }
}

impl Default for CellMeasurer {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH)
    }
}

impl TextMeasurer for CellMeasurer {
    async fn measure(&self, texts: &[String], _font: FontSpec) -> Result<Vec<f64>> {
        Ok(texts.iter().map(|text| self.width(text)).collect())
    }
}
