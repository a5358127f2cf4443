//! Terminal rendering for the nextbday widget.
//!
//! This crate draws a [`WidgetLayout`](nextbday_layout::WidgetLayout) or a
//! [`BirthdayError`](nextbday_protocol::BirthdayError) with Ratatui and prints
//! the result to the terminal.
//!
//! # Overview
//!
//! - [`theme`]: Background parsing, contrast, and the curated palettes
//! - [`measure`]: [`CellMeasurer`], text widths in terminal cells
//! - [`widgets`]: The birthday list and error panels
//! - [`terminal`]: Printing a rendered buffer with ANSI styles
//!
//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use nextbday_config::{Settings, SizeClass};
//! use nextbday_layout::compose;
//! use nextbday_protocol::dummy::dummy_birthdays;
//! use nextbday_tui::{CellMeasurer, Theme, terminal, widgets};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::default();
//!     let measurer = CellMeasurer::default();
//!     let today = Local::now().date_naive();
//!     let layout = compose(&dummy_birthdays(), today, SizeClass::Large, &settings, &measurer).await?;
//!
//!     let theme = Theme::from_background(&settings.background_color)?;
//!     let (width, height) = widgets::panel_size(&layout, &measurer);
//!     let buf = terminal::render_to_buffer(width, height, |area, buf| {
//!         widgets::render_birthdays(&layout, &theme, &measurer, area, buf);
//!     });
//!     terminal::print_buffer(&buf, &mut std::io::stdout())?;
//!     Ok(())
//! }
//! ```

pub mod measure;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use measure::CellMeasurer;
pub use theme::{InvalidColor, Palette, Rgb, Theme};
