//! Configuration management for the nextbday widget.
//!
//! This crate handles loading, validating, and persisting the widget
//! settings, and resolving per-size visual constants.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`settings`]: The settings struct and per-size resolution
//! - [`size`]: Size classes, per-size tables, and the day unit
//! - [`persistence`]: Settings file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Settings Sources (Priority)
//!
//! 1. Local settings (`./nextbday.json5` or `./nextbday.json`)
//! 2. User settings (`~/.config/nextbday/config.json5` or `config.json`)
//! 3. Built-in defaults
//!
//! # Per-size Values
//!
//! Visual constants are looked up for the current size class first, then
//! under the `"default"` key, then fall back to a hard-coded constant:
//!
//! ```json5
//! {
//!   title_size: { accessoryRectangular: 0, small: 12, medium: 18, default: 26 },
//!   day_unit: { small: "d", default: [" day", " days"] },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use nextbday_config::{Settings, SizeClass};
//!
//! # fn example() -> nextbday_config::Result<()> {
//! let settings = Settings::load()?;
//! let medium = settings.resolve(SizeClass::Medium);
//! println!("Showing {} birthdays", medium.entries);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod persistence;
pub mod settings;
pub mod size;

// Re-export primary types at crate root for convenience
pub use error::{ConfigError, Result};
pub use settings::{FontFamilies, Settings, SizedSettings, TitleAlignment};
pub use size::{DayUnit, PerSize, SizeClass, resolve};
