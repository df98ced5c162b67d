//! Calendar input parsed from YAML.
//!
//! ```yaml
//! year: 2016
//!
//! special dates:
//!   05-04: May the Fourth be with you
//!
//! birthdays:
//!   1991-01-11:
//!     - Remco
//!
//! weddings:
//!   2006-06-06:
//!     - - Husband
//!       - Wife
//! ```
//!
//! All four keys are required. A year passed to
//! [`CalendarConfig::resolve`] takes the place of the `year` key.

use serde::Deserialize;
use wk_core::errors::{Error, Result};
use wk_time::{HolidayCalendar, Locale};

use crate::tables::{Birthdays, EventTables, SpecialDates, Weddings};
use crate::year::{weeks_for_year, Weeks};

/// Configuration exactly as read; every key may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CalendarConfig {
    /// Year to generate.
    #[serde(default)]
    pub year: Option<u16>,

    /// Texts keyed by `MM-DD`.
    #[serde(default, rename = "special dates")]
    pub special_dates: Option<SpecialDates>,

    /// Names keyed by date of birth.
    #[serde(default)]
    pub birthdays: Option<Birthdays>,

    /// Couples keyed by wedding date.
    #[serde(default)]
    pub weddings: Option<Weddings>,
}

impl CalendarConfig {
    /// Parse a YAML document.
    ///
    /// Malformed YAML and malformed dates are reported as
    /// [`Error::Parse`]; missing keys are only detected by
    /// [`resolve`](Self::resolve).
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Check that every required key is present.
    ///
    /// `year` overrides the configured year.
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the first missing key, checked in
    /// the order `year`, `birthdays`, `weddings`, `special dates`.
    pub fn resolve(self, year: Option<u16>) -> Result<CalendarInput> {
        let year = year.or(self.year).ok_or(Error::Config { key: "year" })?;
        let birthdays = self.birthdays.ok_or(Error::Config { key: "birthdays" })?;
        let weddings = self.weddings.ok_or(Error::Config { key: "weddings" })?;
        let special_dates = self.special_dates.ok_or(Error::Config {
            key: "special dates",
        })?;
        Ok(CalendarInput {
            year,
            tables: EventTables::new(special_dates, birthdays, weddings),
        })
    }
}

/// A year and the tables to annotate it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarInput {
    /// Year to generate.
    pub year: u16,
    /// Event tables.
    pub tables: EventTables,
}

impl CalendarInput {
    /// The weeks of [`year`](Self::year).
    pub fn weeks<'a>(
        &'a self,
        calendar: &'a dyn HolidayCalendar,
        locale: &'a dyn Locale,
    ) -> Result<Weeks<'a>> {
        weeks_for_year(self.year, calendar, locale, &self.tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wk_time::{Date, Dutch, Netherlands};

    const EXAMPLE: &str = "\
year: 2016

special dates:
  05-04: May the Fourth be with you
  05-05: Revenge of the Fifth

birthdays:
  1991-01-11:
    - Remco
  1991-08-25:
    - Linux

weddings:
  2006-06-06:
    - - Husband
      - Wife
";

    #[test]
    fn parses_example() {
        let config = CalendarConfig::from_yaml_str(EXAMPLE).unwrap();
        assert_eq!(config.year, Some(2016));
        assert_eq!(config.special_dates.as_ref().map(SpecialDates::len), Some(2));
        assert_eq!(config.birthdays.as_ref().map(Birthdays::len), Some(2));
        let input = config.resolve(None).unwrap();
        assert_eq!(input.year, 2016);
        let wedding = Date::from_ymd(2006, 6, 6).unwrap();
        let (married, couples) = input.tables.weddings.iter().next().unwrap();
        assert_eq!(married, wedding);
        assert_eq!(couples[0], ["Husband", "Wife"]);
    }

    #[test]
    fn year_override() {
        let input = CalendarConfig::from_yaml_str(EXAMPLE)
            .unwrap()
            .resolve(Some(2020))
            .unwrap();
        assert_eq!(input.year, 2020);
    }

    #[test]
    fn missing_keys_are_config_errors() {
        let cases = [
            ("birthdays: {}\nweddings: {}\nspecial dates: {}\n", "year"),
            ("year: 2016\nweddings: {}\nspecial dates: {}\n", "birthdays"),
            ("year: 2016\nbirthdays: {}\nspecial dates: {}\n", "weddings"),
            ("year: 2016\nbirthdays: {}\nweddings: {}\n", "special dates"),
        ];
        for (yaml, missing) in cases {
            let err = CalendarConfig::from_yaml_str(yaml)
                .unwrap()
                .resolve(None)
                .unwrap_err();
            assert_eq!(err, Error::Config { key: missing });
        }
    }

    #[test]
    fn cli_year_satisfies_missing_year() {
        let yaml = "birthdays: {}\nweddings: {}\nspecial dates: {}\n";
        let input = CalendarConfig::from_yaml_str(yaml)
            .unwrap()
            .resolve(Some(2018))
            .unwrap();
        assert_eq!(input.year, 2018);
        assert!(input.tables.birthdays.is_empty());
    }

    #[test]
    fn malformed_dates_are_parse_errors() {
        let yaml = "year: 2016\nbirthdays:\n  1991-02-30:\n    - Nobody\n";
        assert!(matches!(
            CalendarConfig::from_yaml_str(yaml),
            Err(Error::Parse(_))
        ));
        let yaml = "special dates:\n  13-01: Nope\n";
        assert!(matches!(
            CalendarConfig::from_yaml_str(yaml),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn weeks_from_input() {
        let input = CalendarConfig::from_yaml_str(EXAMPLE)
            .unwrap()
            .resolve(None)
            .unwrap();
        let weeks: Vec<_> = input.weeks(&Netherlands, &Dutch).unwrap().collect();
        assert_eq!(weeks.len(), 53);
        let jan_11 = weeks
            .iter()
            .flat_map(|w| w.days().iter())
            .find(|d| d.date() == Date::from_ymd(2016, 1, 11).unwrap())
            .unwrap();
        assert_eq!(jan_11.events(), ["Remco 25 jaar"]);
    }
}
