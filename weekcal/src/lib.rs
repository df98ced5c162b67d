//! # weekcal
//!
//! Week calendars for an entire year, with Dutch holidays, birthdays,
//! wedding anniversaries and custom yearly dates.
//!
//! This crate re-exports the `wk-*` workspace crates and adds the
//! renderers used by the `weekcal` binary.
//!
//! ```rust
//! use weekcal::calendar::{weeks_for_year, EventTables};
//! use weekcal::render::{render, Format};
//! use weekcal::time::{Dutch, Netherlands};
//!
//! let tables = EventTables::default();
//! let weeks: Vec<_> = weeks_for_year(2016, &Netherlands, &Dutch, &tables)
//!     .unwrap()
//!     .collect();
//! let mut out = Vec::new();
//! render(Format::Text, &weeks, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("Week 53: Januari / December"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and helper macros.
pub use wk_core as core;

/// Dates, holidays and locales.
pub use wk_time as time;

/// Day and week records, event tables and configuration.
pub use wk_calendar as calendar;

/// Text and JSON output.
pub mod render;
