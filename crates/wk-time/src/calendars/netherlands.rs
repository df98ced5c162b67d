//! Netherlands calendar.
//!
//! Rules are evaluated in table order: fixed dates, then weekday-of-month
//! observances, then the Easter cycle, then Carnival. Where two rules fire
//! on the same date the earlier one wins, e.g. the start of summer time
//! hides an Easter Sunday that falls on the last Sunday of March.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use crate::holiday::Holiday;
use crate::month::Month::*;
use crate::rules::{first_match, HolidayRule};
use crate::weekday::Weekday::{Sunday, Tuesday};

/// Netherlands calendar.
///
/// Fixed dates:
/// * New Year (Jan 1), Epiphany (Jan 6), Valentine (Feb 14)
/// * King's Day (Apr 27), Remembrance Day (May 4), Liberation Day (May 5)
/// * Snack Day (Jul 29), Animal Day (Oct 4), Sinterklaas (Dec 5)
/// * Christmas (Dec 25, Dec 26), New Year's Eve (Dec 31)
///
/// Weekday of month:
/// * Summer time: Sunday after Mar 24
/// * Mother's Day: Sunday between May 7 and 15
/// * Father's Day: Sunday between Jun 14 and 22
/// * Prince's Day: Tuesday between Sep 15 and 23
/// * Winter time: Sunday after Oct 24
///
/// Easter cycle (offset from Easter Sunday):
/// * Good Friday (−2), Easter Sunday (0), Easter Monday (+1)
/// * Ascension (+39), Whit Sunday (+49), Whit Monday (+50)
/// * Carnival: the three days before Ash Wednesday
#[derive(Debug, Clone, Copy, Default)]
pub struct Netherlands;

impl Netherlands {
    /// The rule table, in precedence order.
    pub const RULES: [HolidayRule; 24] = [
        HolidayRule::fixed(January, 1, Holiday::NewYear),
        HolidayRule::fixed(January, 6, Holiday::Epiphany),
        HolidayRule::fixed(February, 14, Holiday::Valentine),
        HolidayRule::fixed(April, 27, Holiday::KingsDay),
        HolidayRule::fixed(May, 4, Holiday::RemembranceDay),
        HolidayRule::fixed(May, 5, Holiday::LiberationDay),
        HolidayRule::fixed(July, 29, Holiday::SnackDay),
        HolidayRule::fixed(October, 4, Holiday::AnimalDay),
        HolidayRule::fixed(December, 5, Holiday::Sinterklaas),
        HolidayRule::fixed(December, 25, Holiday::ChristmasDay),
        HolidayRule::fixed(December, 26, Holiday::SecondChristmasDay),
        HolidayRule::fixed(December, 31, Holiday::NewYearsEve),
        HolidayRule::weekday_after(March, Sunday, 24, Holiday::SummerTime),
        HolidayRule::weekday_between(May, Sunday, 7, 15, Holiday::MothersDay),
        HolidayRule::weekday_between(June, Sunday, 14, 22, Holiday::FathersDay),
        HolidayRule::weekday_between(September, Tuesday, 15, 23, Holiday::PrincesDay),
        HolidayRule::weekday_after(October, Sunday, 24, Holiday::WinterTime),
        HolidayRule::easter(0, Holiday::EasterSunday),
        HolidayRule::easter(-2, Holiday::GoodFriday),
        HolidayRule::easter(1, Holiday::EasterMonday),
        HolidayRule::easter(39, Holiday::Ascension),
        HolidayRule::easter(49, Holiday::WhitSunday),
        HolidayRule::easter(50, Holiday::WhitMonday),
        HolidayRule::Carnival,
    ];
}

impl HolidayCalendar for Netherlands {
    fn name(&self) -> &str {
        "Netherlands"
    }

    fn holiday(&self, date: Date) -> Option<Holiday> {
        first_match(&Self::RULES, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn holiday(y: u16, m: u8, d: u8) -> Option<Holiday> {
        Netherlands.holiday(date(y, m, d))
    }

    #[test]
    fn fixed_dates() {
        assert_eq!(holiday(2016, 1, 1), Some(Holiday::NewYear));
        assert_eq!(holiday(2016, 1, 6), Some(Holiday::Epiphany));
        assert_eq!(holiday(2016, 2, 14), Some(Holiday::Valentine));
        assert_eq!(holiday(2016, 4, 27), Some(Holiday::KingsDay));
        assert_eq!(holiday(2016, 5, 4), Some(Holiday::RemembranceDay));
        assert_eq!(holiday(2016, 7, 29), Some(Holiday::SnackDay));
        assert_eq!(holiday(2016, 10, 4), Some(Holiday::AnimalDay));
        assert_eq!(holiday(2016, 12, 5), Some(Holiday::Sinterklaas));
        assert_eq!(holiday(2016, 12, 25), Some(Holiday::ChristmasDay));
        assert_eq!(holiday(2016, 12, 26), Some(Holiday::SecondChristmasDay));
        assert_eq!(holiday(2016, 12, 31), Some(Holiday::NewYearsEve));
    }

    #[test]
    fn weekday_of_month_2016() {
        assert_eq!(holiday(2016, 5, 8), Some(Holiday::MothersDay));
        assert_eq!(holiday(2016, 6, 19), Some(Holiday::FathersDay));
        assert_eq!(holiday(2016, 9, 20), Some(Holiday::PrincesDay));
        assert_eq!(holiday(2016, 10, 30), Some(Holiday::WinterTime));
        // Last Sunday of March 2016 is Easter; summer time takes precedence.
        assert_eq!(holiday(2016, 3, 27), Some(Holiday::SummerTime));
    }

    #[test]
    fn easter_cycle_2023() {
        // Easter Sunday 2023: April 9.
        assert_eq!(holiday(2023, 4, 7), Some(Holiday::GoodFriday));
        assert_eq!(holiday(2023, 4, 9), Some(Holiday::EasterSunday));
        assert_eq!(holiday(2023, 4, 10), Some(Holiday::EasterMonday));
        assert_eq!(holiday(2023, 5, 18), Some(Holiday::Ascension));
        assert_eq!(holiday(2023, 5, 28), Some(Holiday::WhitSunday));
        assert_eq!(holiday(2023, 5, 29), Some(Holiday::WhitMonday));
        assert_eq!(holiday(2023, 4, 11), None);
    }

    #[test]
    fn easter_2024() {
        assert_eq!(holiday(2024, 3, 29), Some(Holiday::GoodFriday));
        assert_eq!(holiday(2024, 4, 1), Some(Holiday::EasterMonday));
        // Easter Sunday 2024-03-31 is also the last Sunday of March.
        assert_eq!(holiday(2024, 3, 31), Some(Holiday::SummerTime));
        assert_eq!(holiday(2024, 3, 30), None);
    }

    #[test]
    fn carnival_2024() {
        assert_eq!(holiday(2024, 2, 10), None);
        assert_eq!(holiday(2024, 2, 11), Some(Holiday::Carnival));
        assert_eq!(holiday(2024, 2, 12), Some(Holiday::Carnival));
        assert_eq!(holiday(2024, 2, 13), Some(Holiday::Carnival));
        assert_eq!(holiday(2024, 2, 14), Some(Holiday::Valentine));
        assert_eq!(holiday(2024, 2, 15), None);
    }

    #[test]
    fn precedence_on_overlaps() {
        // Ascension 2016 falls on Liberation Day.
        assert_eq!(holiday(2016, 5, 5), Some(Holiday::LiberationDay));
        // Whit Sunday 2008 falls on Mother's Day.
        assert_eq!(holiday(2008, 5, 11), Some(Holiday::MothersDay));
    }

    #[test]
    fn ordinary_days() {
        assert_eq!(holiday(2023, 6, 15), None);
        assert_eq!(holiday(2023, 1, 2), None);
    }
}
