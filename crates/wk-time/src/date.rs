//! `Date` type.
//!
//! Dates are stored as a serial number of days relative to 1970-01-01 in
//! the proleptic Gregorian calendar.
//!
//! # Valid range
//! * 1583-01-01 (the first full Gregorian year) through 9999-12-31.
//! * Every constructor checks the range; the arithmetic operators panic on
//!   overflow, [`Date::add_days`] reports it as an error instead.

use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::month::Month;
use crate::weekday::Weekday;
use wk_core::errors::{Error, Result};

/// A calendar date represented as a day serial.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// First supported year.
    pub const MIN_YEAR: u16 = 1583;

    /// Last supported year.
    pub const MAX_YEAR: u16 = 9999;

    /// Minimum valid date: January 1, 1583.
    pub const MIN: Date = Date(days_from_civil(Self::MIN_YEAR as i32, 1, 1));

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(days_from_civil(Self::MAX_YEAR as i32, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        let month = Month::from_number(month)
            .ok_or_else(|| Error::Date(format!("month {month} out of range [1, 12]")))?;
        Self::from_year_month_day(year, month, day)
    }

    /// Create a date from a year, a [`Month`] and a day-of-month.
    pub fn from_year_month_day(year: u16, month: Month, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        let days_in = month.days_in(year);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month}"
            )));
        }
        Ok(Self::from_ymd_unchecked(year, month.number(), day))
    }

    /// Create a date from components already known to be valid.
    pub(crate) fn from_ymd_unchecked(year: u16, month: u8, day: u8) -> Self {
        debug_assert!((1..=12).contains(&month));
        Date(days_from_civil(year as i32, month as i32, day as i32))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the day serial (days since 1970-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        civil_from_days(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        let m = civil_from_days(self.0).1;
        Month::ALL[m as usize - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let jan_01 = days_from_civil(self.year() as i32, 1, 1);
        (self.0 - jan_01 + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::ALL[w as usize - 1]
    }

    /// Return the ISO-8601 week-numbering year and week (1–53).
    ///
    /// Days around New Year can belong to a week of the neighbouring year:
    /// 2014-12-29 is in week 1 of 2015 and 2016-01-01 in week 53 of 2015.
    pub fn iso_year_week(&self) -> (u16, u8) {
        let year = self.year();
        let week = (self.day_of_year() + 10 - self.weekday().ordinal() as u16) / 7;
        match week {
            0 => (year - 1, weeks_in_year(year - 1)),
            53 if weeks_in_year(year) == 52 => (year + 1, 1),
            w => (year, w as u8),
        }
    }

    /// Return the ISO-8601 week number (1–53).
    pub fn iso_week(&self) -> u8 {
        self.iso_year_week().1
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days. Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let d = self
            .0
            .checked_add(n)
            .map(Date)
            .filter(|d| (Self::MIN..=Self::MAX).contains(d));
        d.ok_or_else(|| Error::Date(format!("{self} + {n} days is out of range")))
    }

    /// Return the Monday on or before this date.
    pub fn start_of_week(self) -> Result<Self> {
        self.add_days(-(self.weekday().days_from_monday() as i32))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return `true` if `other` falls on the same month and day, ignoring
    /// the year.
    pub fn same_month_day(&self, other: &Date) -> bool {
        let (_, m1, d1) = civil_from_days(self.0);
        let (_, m2, d2) = civil_from_days(other.0);
        m1 == m2 && d1 == d2
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── Formatting & parsing ──────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = civil_from_days(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut parts = s.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
        };
        let number = |part: &str| -> Result<u16> {
            part.parse()
                .map_err(|_| Error::Parse(format!("expected YYYY-MM-DD, got {s:?}")))
        };
        let (month, day) = (number(m)?, number(d)?);
        if month > 12 || day > 31 {
            return Err(Error::Parse(format!("{s:?} is not a calendar date")));
        }
        Date::from_ymd(number(y)?, month as u8, day as u8)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of ISO weeks (52 or 53) in the week-numbering `year`.
pub fn weeks_in_year(year: u16) -> u8 {
    let jan_01 = Date(days_from_civil(year as i32, 1, 1)).weekday();
    match jan_01 {
        Weekday::Thursday => 53,
        Weekday::Wednesday if is_leap_year(year) => 53,
        _ => 52,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
///
/// Counts in 400-year eras starting on March 1 so February's length only
/// matters at the end of each computed year.
const fn days_from_civil(y: i32, m: i32, d: i32) -> i32 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(z: i32) -> (u16, u8, u8) {
    let z = z + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1970, 1, 1).serial(), 0);
        assert_eq!(date(1970, 1, 2).serial(), 1);
        assert_eq!(date(1969, 12, 31).serial(), -1);
    }

    #[test]
    fn test_components() {
        let dates = [
            (1583, 1, 1),
            (1900, 2, 28),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2023, 6, 15),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = date(y, m, d);
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month().number(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_dates() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 4, 31).is_err());
        assert!(Date::from_ymd(2023, 4, 0).is_err());
        assert!(Date::from_ymd(1582, 12, 31).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
        assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(date(1583, 1, 1).weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(2023, 1, 1).day_of_year(), 1);
        assert_eq!(date(2023, 12, 31).day_of_year(), 365);
        assert_eq!(date(2024, 12, 31).day_of_year(), 366);
        assert_eq!(date(2024, 3, 1).day_of_year(), 61);
    }

    #[test]
    fn test_iso_week() {
        assert_eq!(date(2014, 12, 29).iso_year_week(), (2015, 1));
        assert_eq!(date(2016, 1, 1).iso_year_week(), (2015, 53));
        assert_eq!(date(2019, 10, 4).iso_week(), 40);
        assert_eq!(date(2020, 12, 31).iso_week(), 53);
        assert_eq!(date(2021, 1, 1).iso_week(), 53);
        assert_eq!(date(2024, 12, 30).iso_year_week(), (2025, 1));
    }

    #[test]
    fn test_start_of_week() {
        assert_eq!(date(2015, 1, 1).start_of_week().unwrap(), date(2014, 12, 29));
        assert_eq!(date(2024, 1, 1).start_of_week().unwrap(), date(2024, 1, 1));
        assert_eq!(date(2017, 1, 1).start_of_week().unwrap(), date(2016, 12, 26));
        // 1583-01-01 is a Saturday; its Monday predates the supported range.
        assert!(Date::MIN.start_of_week().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2023, 1, 1);
        let d2 = d + 31;
        assert_eq!(d2, date(2023, 2, 1));
        assert_eq!(d2 - d, 31);
        assert_eq!(d.days_between(d2), 31);
        assert_eq!(date(2024, 3, 1) - 1, date(2024, 2, 29));
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn test_same_month_day() {
        assert!(date(1991, 1, 11).same_month_day(&date(2016, 1, 11)));
        assert!(!date(1991, 1, 11).same_month_day(&date(2016, 1, 12)));
        assert!(!date(1991, 1, 11).same_month_day(&date(2016, 2, 11)));
    }

    #[test]
    fn test_parse_and_display() {
        let d: Date = "2016-01-11".parse().unwrap();
        assert_eq!(d, date(2016, 1, 11));
        assert_eq!(d.to_string(), "2016-01-11");
        assert_eq!(format!("{d:?}"), "Date(2016-01-11)");
        assert!("2016-01".parse::<Date>().is_err());
        assert!("2016-02-30".parse::<Date>().is_err());
        assert!("not-a-date".parse::<Date>().is_err());
        assert!(matches!("2016-13-01".parse::<Date>(), Err(Error::Parse(_))));
    }
}
