//! Week sequencing over a whole year.
//!
//! The first week starts on the Monday on or before January 1, so it may
//! begin in the previous year. Weeks follow every seven days for as long as
//! their Monday lies in the target year; the last week may end in the next
//! year. Depending on the weekday of January 1 a year has 53 or 54 weeks.

use std::iter::FusedIterator;

use wk_core::errors::{Error, Result};
use wk_time::{Date, HolidayCalendar, Locale};

use crate::day::DayBuilder;
use crate::tables::EventTables;
use crate::week::Week;

/// Years that can be sequenced: both neighbouring years must be
/// representable.
pub const YEAR_RANGE: std::ops::RangeInclusive<u16> = (Date::MIN_YEAR + 1)..=(Date::MAX_YEAR - 1);

/// The Monday on or before January 1 of `year`.
pub fn first_week_start(year: u16) -> Result<Date> {
    Date::from_ymd(year, 1, 1)?.start_of_week()
}

/// Lazy sequence of the weeks of a year.
///
/// The sequence holds no state beyond its position; constructing a new one
/// with the same inputs yields the same weeks.
#[derive(Debug, Clone)]
pub struct Weeks<'a> {
    year: u16,
    next: Date,
    last_day: Date,
    builder: DayBuilder<'a>,
}

impl<'a> Weeks<'a> {
    /// Sequence the weeks of `year`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `year` is outside
    /// [`YEAR_RANGE`].
    pub fn new(year: u16, builder: DayBuilder<'a>) -> Result<Self> {
        if !YEAR_RANGE.contains(&year) {
            return Err(Error::InvalidArgument(format!(
                "year {year} out of range [{}, {}]",
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            )));
        }
        Ok(Self {
            year,
            next: first_week_start(year)?,
            last_day: Date::from_ymd(year, 12, 31)?,
            builder,
        })
    }

    /// The target year.
    pub fn year(&self) -> u16 {
        self.year
    }
}

impl Iterator for Weeks<'_> {
    type Item = Week;

    fn next(&mut self) -> Option<Week> {
        if self.next > self.last_day {
            return None;
        }
        let week = Week::assemble(&self.builder, self.next);
        self.next += 7;
        Some(week)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next > self.last_day {
            0
        } else {
            (self.next.days_between(self.last_day) / 7 + 1) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Weeks<'_> {}

impl FusedIterator for Weeks<'_> {}

/// Sequence the weeks of `year` annotated from `calendar` and `tables`.
pub fn weeks_for_year<'a>(
    year: u16,
    calendar: &'a dyn HolidayCalendar,
    locale: &'a dyn Locale,
    tables: &'a EventTables,
) -> Result<Weeks<'a>> {
    Weeks::new(year, DayBuilder::new(calendar, locale, tables))
}
