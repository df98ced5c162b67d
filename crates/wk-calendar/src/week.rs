//! `Week`: seven consecutive days with a week number and month label.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::info;
use wk_core::errors::Result;
use wk_time::{capitalize, Date, Locale, Month, Weekday};

use crate::day::{Day, DayBuilder};

/// Separator between the two month names of a week spanning two months.
pub const MONTH_SEPARATOR: &str = " / ";

/// Seven consecutive [`Day`] records starting on a Monday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    number: u8,
    month: String,
    days: [Day; 7],
}

impl Week {
    /// Build the week starting on `monday`.
    ///
    /// Returns an error if the week runs past [`Date::MAX`].
    pub fn build(builder: &DayBuilder<'_>, monday: Date) -> Result<Self> {
        monday.add_days(6)?;
        Ok(Self::assemble(builder, monday))
    }

    /// Build a week already known to lie within the supported range.
    pub(crate) fn assemble(builder: &DayBuilder<'_>, monday: Date) -> Self {
        let number = monday.iso_week();
        info!("Week {number}");
        let days: [Day; 7] = std::array::from_fn(|i| builder.build(monday + i as i32));
        let month = month_label(
            builder.locale(),
            days[0].date().month(),
            days[6].date().month(),
        );
        Self {
            number,
            month,
            days,
        }
    }

    /// ISO week number of the first day.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Month label, e.g. `"Maart"` or `"April / Maart"`.
    pub fn month_label(&self) -> &str {
        &self.month
    }

    /// All seven days, Monday first.
    pub fn days(&self) -> &[Day; 7] {
        &self.days
    }

    /// The day falling on `weekday`.
    pub fn day(&self, weekday: Weekday) -> &Day {
        &self.days[weekday.days_from_monday() as usize]
    }

    /// Date of the first day.
    pub fn start_date(&self) -> Date {
        self.days[0].date()
    }

    /// Date of the last day.
    pub fn end_date(&self) -> Date {
        self.days[6].date()
    }
}

/// Capitalized month label for a week running from a day in `first` to a
/// day in `last`.
///
/// A week within one month gets that month's name. Otherwise both names
/// are joined by [`MONTH_SEPARATOR`], the month of the last day first.
pub fn month_label(locale: &dyn Locale, first: Month, last: Month) -> String {
    let last_name = capitalize(locale.month_name(last));
    if first == last {
        last_name
    } else {
        let first_name = capitalize(locale.month_name(first));
        format!("{last_name}{MONTH_SEPARATOR}{first_name}")
    }
}

impl Serialize for Week {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Week", 9)?;
        s.serialize_field("weeknumber", &self.number)?;
        s.serialize_field("month", &self.month)?;
        for weekday in Weekday::ALL {
            s.serialize_field(weekday.key(), self.day(weekday))?;
        }
        s.end()
    }
}
