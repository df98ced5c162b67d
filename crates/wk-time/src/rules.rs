//! Holiday rules.
//!
//! Each [`HolidayRule`] is an independent predicate on a date.
//! [`first_match`] evaluates a table of rules in order, so precedence
//! between overlapping rules is the table order.

use crate::date::Date;
use crate::easter::{carnival_anchor, easter_sunday};
use crate::holiday::Holiday;
use crate::month::Month;
use crate::weekday::Weekday;

/// Number of days Carnival lasts, ending on the Carnival anchor.
const CARNIVAL_DAYS: i32 = 3;

/// A single holiday rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// The same month and day every year.
    Fixed {
        /// Month of the holiday.
        month: Month,
        /// Day of the month.
        day: u8,
        /// Holiday produced.
        holiday: Holiday,
    },
    /// A given weekday whose day-of-month lies strictly between `after`
    /// and `before`.
    WeekdayOfMonth {
        /// Month of the holiday.
        month: Month,
        /// Required weekday.
        weekday: Weekday,
        /// Exclusive lower bound on the day of the month.
        after: u8,
        /// Exclusive upper bound on the day of the month.
        before: u8,
        /// Holiday produced.
        holiday: Holiday,
    },
    /// A fixed number of days from Gregorian Easter Sunday.
    EasterOffset {
        /// Offset in days; negative before Easter.
        offset: i32,
        /// Holiday produced.
        holiday: Holiday,
    },
    /// The three days ending on the Carnival anchor.
    Carnival,
}

impl HolidayRule {
    /// Rule for a fixed month and day.
    pub const fn fixed(month: Month, day: u8, holiday: Holiday) -> Self {
        HolidayRule::Fixed { month, day, holiday }
    }

    /// Rule for `weekday` with `after < day < before`.
    pub const fn weekday_between(
        month: Month,
        weekday: Weekday,
        after: u8,
        before: u8,
        holiday: Holiday,
    ) -> Self {
        HolidayRule::WeekdayOfMonth {
            month,
            weekday,
            after,
            before,
            holiday,
        }
    }

    /// Rule for `weekday` with `day > after`, up to the end of the month.
    pub const fn weekday_after(month: Month, weekday: Weekday, after: u8, holiday: Holiday) -> Self {
        Self::weekday_between(month, weekday, after, 32, holiday)
    }

    /// Rule for `offset` days from Easter Sunday.
    pub const fn easter(offset: i32, holiday: Holiday) -> Self {
        HolidayRule::EasterOffset { offset, holiday }
    }

    /// The holiday this rule produces.
    pub fn holiday(&self) -> Holiday {
        match *self {
            HolidayRule::Fixed { holiday, .. }
            | HolidayRule::WeekdayOfMonth { holiday, .. }
            | HolidayRule::EasterOffset { holiday, .. } => holiday,
            HolidayRule::Carnival => Holiday::Carnival,
        }
    }

    /// Return `true` if the rule fires on `date`.
    pub fn matches(&self, date: Date) -> bool {
        match *self {
            HolidayRule::Fixed { month, day, .. } => {
                date.month() == month && date.day_of_month() == day
            }
            HolidayRule::WeekdayOfMonth {
                month,
                weekday,
                after,
                before,
                ..
            } => {
                let d = date.day_of_month();
                date.month() == month && date.weekday() == weekday && after < d && d < before
            }
            HolidayRule::EasterOffset { offset, .. } => {
                date - easter_sunday(date.year()) == offset
            }
            HolidayRule::Carnival => {
                let anchor = carnival_anchor(easter_sunday(date.year()));
                (0..CARNIVAL_DAYS).contains(&(anchor - date))
            }
        }
    }
}

/// Return the holiday of the first rule in `rules` that fires on `date`.
pub fn first_match(rules: &[HolidayRule], date: Date) -> Option<Holiday> {
    rules.iter().find(|r| r.matches(date)).map(HolidayRule::holiday)
}
