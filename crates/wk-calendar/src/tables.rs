//! Lookup tables of user-supplied events.
//!
//! * [`SpecialDates`]: text keyed by month and day, every year.
//! * [`Birthdays`]: names keyed by date of birth.
//! * [`Weddings`]: couples keyed by wedding date.
//!
//! Tables keep insertion order, which is the order their events appear in
//! a day's event list.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use wk_core::errors::{Error, Result};
use wk_time::{Date, Month};

/// A year-independent (month, day) key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: Month,
    day: u8,
}

impl MonthDay {
    /// Create a key. February 29 is accepted.
    pub fn new(month: Month, day: u8) -> Result<Self> {
        // 2000 is a leap year, so this admits every day that exists in any year.
        let days_in = month.days_in(2000);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for month {month}"
            )));
        }
        Ok(Self { month, day })
    }

    /// The key of `date`.
    pub fn of(date: Date) -> Self {
        Self {
            month: date.month(),
            day: date.day_of_month(),
        }
    }

    /// Month component.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Day-of-month component.
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    /// Parse `MM-DD`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let bad = || Error::Parse(format!("expected MM-DD, got {s:?}"));
        let (m, d) = s.split_once('-').ok_or_else(bad)?;
        let month: u8 = m.parse().map_err(|_| bad())?;
        let day: u8 = d.parse().map_err(|_| bad())?;
        let month = Month::from_number(month).ok_or_else(bad)?;
        MonthDay::new(month, day)
    }
}

impl Serialize for MonthDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Text shown every year on a given month and day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecialDates(IndexMap<MonthDay, String>);

impl SpecialDates {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text for `key`, replacing any previous text.
    pub fn insert(&mut self, key: MonthDay, text: impl Into<String>) -> Option<String> {
        self.0.insert(key, text.into())
    }

    /// The text for the month and day of `date`.
    pub fn get(&self, date: Date) -> Option<&str> {
        self.0.get(&MonthDay::of(date)).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(MonthDay, String)> for SpecialDates {
    fn from_iter<I: IntoIterator<Item = (MonthDay, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Names of people keyed by their date of birth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthdays(IndexMap<Date, Vec<String>>);

impl Birthdays {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person born on `born`.
    pub fn add(&mut self, born: Date, name: impl Into<String>) {
        self.0.entry(born).or_default().push(name.into());
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &[String])> + '_ {
        self.0.iter().map(|(d, names)| (*d, names.as_slice()))
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Date, Vec<String>)> for Birthdays {
    fn from_iter<I: IntoIterator<Item = (Date, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The names of a married couple, in display order.
pub type Couple = Vec<String>;

/// Couples keyed by their wedding date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weddings(IndexMap<Date, Vec<Couple>>);

impl Weddings {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a couple married on `married`.
    pub fn add<I, S>(&mut self, married: Date, couple: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let couple = couple.into_iter().map(Into::into).collect();
        self.0.entry(married).or_default().push(couple);
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &[Couple])> + '_ {
        self.0.iter().map(|(d, couples)| (*d, couples.as_slice()))
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Date, Vec<Couple>)> for Weddings {
    fn from_iter<I: IntoIterator<Item = (Date, Vec<Couple>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The three tables a calendar is annotated from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTables {
    /// Month-day texts.
    pub special_dates: SpecialDates,
    /// Birthdays.
    pub birthdays: Birthdays,
    /// Wedding anniversaries.
    pub weddings: Weddings,
}

impl EventTables {
    /// Bundle three tables.
    pub fn new(special_dates: SpecialDates, birthdays: Birthdays, weddings: Weddings) -> Self {
        Self {
            special_dates,
            birthdays,
            weddings,
        }
    }
}
