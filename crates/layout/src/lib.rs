//! Layout engine for the nextbday widget.
//!
//! This crate turns a list of birthdays into positioned text boxes, given a
//! way to measure text.
//!
//! # Overview
//!
//! - [`plan`]: Canvas, title and row sizing per size class
//! - [`measure`]: The [`TextMeasurer`] abstraction over glyph metrics
//! - [`truncate`](mod@truncate): Greedy longest-fit truncation with an overflow marker
//! - [`columns`]: Row labels and column placement
//! - [`widget`]: The full pipeline, [`compose`]
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use nextbday_config::{Settings, SizeClass};
//! use nextbday_layout::measure::{FontSpec, TextMeasurer};
//! use nextbday_layout::{Result, compose};
//! use nextbday_protocol::dummy::dummy_birthdays;
//!
//! struct Monospace;
//!
//! impl TextMeasurer for Monospace {
//!     async fn measure(&self, texts: &[String], font: FontSpec) -> Result<Vec<f64>> {
//!         Ok(texts
//!             .iter()
//!             .map(|t| t.chars().count() as f64 * font.size * 0.6)
//!             .collect())
//!     }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let today = NaiveDate::from_ymd_opt(2024, 12, 9).unwrap();
//! let layout = compose(
//!     &dummy_birthdays(),
//!     today,
//!     SizeClass::Medium,
//!     &Settings::default(),
//!     &Monospace,
//! )
//! .await?;
//!
//! assert_eq!(layout.rows.len(), 5);
//! assert_eq!(layout.rows[0].name.text, "Grace Hopper");
//! # Ok::<(), nextbday_layout::LayoutError>(())
//! # }).unwrap();
//! ```

pub mod columns;
pub mod error;
pub mod measure;
pub mod plan;
pub mod truncate;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use columns::{ColumnLayout, RowLabels};
pub use error::{LayoutError, Result};
pub use measure::{FontSpec, FontWeight, TextMeasurer};
pub use plan::{LayoutPlan, Padding, Size};
pub use truncate::{truncate, truncate_measured};
pub use widget::{Alignment, DrawRow, Rect, TextBox, Title, WidgetLayout, compose};
