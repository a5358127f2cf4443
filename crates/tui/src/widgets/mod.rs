//! Widget components for the nextbday panel.
//!
//! Each widget is a pure function that renders a value into a buffer, which
//! keeps them easy to snapshot.
//!
//! # Modules
//!
//! - [`birthdays`]: Renders the laid-out birthday list with its title
//! - [`error`]: Renders the "Oh snap!" panel for a [`BirthdayError`](nextbday_protocol::BirthdayError)
//! - [`palettes`]: Renders the curated background colors
//!
//! # Error Colors
//!
//! | Error | Dark background | Light background |
//! |-------|-----------------|------------------|
//! | `NoCacheFile`, `NoContacts` | Yellow | Orange |
//! | `ContactsAccessDenied`, `Unexpected` | Red | Red |

pub mod birthdays;
pub mod error;
pub mod palettes;

// Re-export primary rendering functions for convenience
pub use birthdays::{TITLE_ROWS, alignment, panel_size, render_birthdays};
pub use error::{ERROR_TITLE, error_color, error_message, error_panel_height, render_error};
pub use palettes::{palettes_height, render_palettes};
