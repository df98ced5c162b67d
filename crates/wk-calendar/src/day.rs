//! `Day`: one annotated calendar day.

use serde::Serialize;
use tracing::info;
use wk_time::{capitalize, Date, HolidayCalendar, Locale};

use crate::recurrence::{anniversaries_on, birthdays_on};
use crate::tables::EventTables;

/// Display fields and events of a single date.
///
/// Events are ordered: holiday, special date, birthdays, anniversaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
    date: Date,
    day: u8,
    month: String,
    short_month: String,
    week_day: String,
    events: Vec<String>,
}

impl Day {
    /// The date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Full month name, as the locale writes it in running text.
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Abbreviated month name.
    pub fn short_month(&self) -> &str {
        &self.short_month
    }

    /// Capitalized weekday name.
    pub fn week_day(&self) -> &str {
        &self.week_day
    }

    /// Event texts; possibly empty. A text may span several lines.
    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// One-line summary, e.g. `"Maandag    11 januari (Remco 25 jaar)"`.
    ///
    /// Line breaks inside events are flattened to `": "`.
    pub fn summary(&self) -> String {
        let mut line = format!("{:<10} {:>2} {}", self.week_day, self.day, self.month);
        if !self.events.is_empty() {
            let events = self.events.join(", ").replace('\n', ": ");
            line.push_str(&format!(" ({events})"));
        }
        line
    }
}

/// Builds [`Day`] records from a holiday calendar, a locale and the event
/// tables.
#[derive(Debug, Clone, Copy)]
pub struct DayBuilder<'a> {
    calendar: &'a dyn HolidayCalendar,
    locale: &'a dyn Locale,
    tables: &'a EventTables,
}

impl<'a> DayBuilder<'a> {
    /// Create a builder.
    pub fn new(
        calendar: &'a dyn HolidayCalendar,
        locale: &'a dyn Locale,
        tables: &'a EventTables,
    ) -> Self {
        Self {
            calendar,
            locale,
            tables,
        }
    }

    /// The locale names are taken from.
    pub fn locale(&self) -> &'a dyn Locale {
        self.locale
    }

    /// The holiday calendar consulted for each day.
    pub fn calendar(&self) -> &'a dyn HolidayCalendar {
        self.calendar
    }

    /// Event texts for `date`.
    pub fn events(&self, date: Date) -> Vec<String> {
        let mut events = Vec::new();
        if let Some(holiday) = self.calendar.holiday(date) {
            events.push(self.locale.holiday_name(holiday).to_owned());
        }
        if let Some(text) = self.tables.special_dates.get(date) {
            events.push(text.to_owned());
        }
        events.extend(
            birthdays_on(date, &self.tables.birthdays)
                .map(|b| self.locale.birthday(b.name, b.age)),
        );
        events.extend(
            anniversaries_on(date, &self.tables.weddings)
                .map(|a| self.locale.anniversary(&a.names, a.age)),
        );
        events
    }

    /// Build the record for `date` and log its summary.
    pub fn build(&self, date: Date) -> Day {
        let month = date.month();
        let day = Day {
            date,
            day: date.day_of_month(),
            month: self.locale.month_name(month).to_owned(),
            short_month: self.locale.month_abbreviation(month).to_owned(),
            week_day: capitalize(self.locale.weekday_name(date.weekday())),
            events: self.events(date),
        };
        info!("{}", day.summary());
        day
    }
}
