//! `HolidayCalendar` trait.
//!
//! A holiday calendar decides which named holiday, if any, falls on a
//! date. At most one holiday is reported per date.

use crate::date::Date;
use crate::holiday::Holiday;

/// A source of named holidays.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Netherlands"`).
    fn name(&self) -> &str;

    /// Return the holiday on `date`, or `None`.
    fn holiday(&self, date: Date) -> Option<Holiday>;
}

/// A calendar without any holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl HolidayCalendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn holiday(&self, _date: Date) -> Option<Holiday> {
        None
    }
}
