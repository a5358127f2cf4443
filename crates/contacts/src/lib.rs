//! Contact sources and birthday cache for nextbday.
//!
//! This crate provides the I/O around the birthday list: reading an address
//! book and caching the normalized result.
//!
//! # Overview
//!
//! - [`ContactSource`]: The address book abstraction, with [`VcardFile`] and
//!   [`StaticSource`] implementations
//! - [`vcard`]: A minimal vCard reader
//! - [`BirthdayCache`]: JSON persistence of the normalized list
//! - [`Error`]: Error types, convertible into
//!   [`BirthdayError`](nextbday_protocol::BirthdayError)
//!
//! # Examples
//!
//! ```no_run
//! use nextbday_contacts::{BirthdayCache, StaticSource};
//! use nextbday_protocol::dummy::dummy_contacts;
//!
//! # async fn example() -> nextbday_contacts::Result<()> {
//! let cache = BirthdayCache::new()?;
//! let birthdays = cache.refresh(&StaticSource::new(dummy_contacts())).await?;
//! assert_eq!(cache.load()?, birthdays);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod source;
pub mod vcard;

pub use cache::BirthdayCache;
pub use error::{Error, Result};
pub use source::{ContactSource, StaticSource, VcardFile};
