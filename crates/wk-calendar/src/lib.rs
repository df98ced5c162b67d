//! # wk-calendar
//!
//! Annotated week calendars: event tables, the recurrence matchers, the day
//! and week builders, the year sequencer and the YAML configuration.
//!
//! ```
//! use wk_calendar::{weeks_for_year, EventTables};
//! use wk_time::{Dutch, Netherlands};
//!
//! let tables = EventTables::default();
//! let weeks: Vec<_> = weeks_for_year(2015, &Netherlands, &Dutch, &tables)
//!     .unwrap()
//!     .collect();
//! assert_eq!(weeks.len(), 53);
//! assert_eq!(weeks[0].month_label(), "Januari / December");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// YAML configuration and required-key checks.
pub mod config;

/// `Day` records and their builder.
pub mod day;

/// Birthday and anniversary matching.
pub mod recurrence;

/// Special-date, birthday and wedding tables.
pub mod tables;

/// `Week` records.
pub mod week;

/// Sequencing the weeks of a year.
pub mod year;

pub use config::{CalendarConfig, CalendarInput};
pub use day::{Day, DayBuilder};
pub use recurrence::{anniversaries_on, birthdays_on, AnniversaryEvent, BirthdayEvent};
pub use tables::{Birthdays, Couple, EventTables, MonthDay, SpecialDates, Weddings};
pub use week::{month_label, Week};
pub use year::{first_week_start, weeks_for_year, Weeks};
