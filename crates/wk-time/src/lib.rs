//! # wk-time
//!
//! Date, weekday and month types, the Easter computus, display locales and
//! the holiday rule engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and the empty calendar.
pub mod calendar;

/// Concrete holiday calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Easter Sunday and Carnival.
pub mod easter;

/// `Holiday`: named holidays.
pub mod holiday;

/// Display names for months, weekdays, holidays and events.
pub mod locale;

/// `Month`: month of the year.
pub mod month;

/// Holiday rules and first-match evaluation.
pub mod rules;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, NullCalendar};
pub use calendars::Netherlands;
pub use date::Date;
pub use easter::{carnival_anchor, easter_sunday};
pub use holiday::Holiday;
pub use locale::{capitalize, Dutch, English, Locale};
pub use month::Month;
pub use rules::{first_match, HolidayRule};
pub use weekday::Weekday;
