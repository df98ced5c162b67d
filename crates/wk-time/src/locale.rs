//! Display names for months, weekdays, holidays and recurring events.
//!
//! Names are supplied through the [`Locale`] trait instead of process-wide
//! locale state, so building a calendar needs no environment setup.

use crate::holiday::Holiday;
use crate::month::Month;
use crate::weekday::Weekday;

/// Source of every human-readable string a calendar contains.
pub trait Locale: std::fmt::Debug + Send + Sync {
    /// Language tag (e.g. `"nl"`).
    fn tag(&self) -> &str;

    /// Full month name as it appears in running text (`"januari"`).
    fn month_name(&self, month: Month) -> &str;

    /// Abbreviated month name (`"jan"`).
    fn month_abbreviation(&self, month: Month) -> &str;

    /// Full weekday name as it appears in running text (`"maandag"`).
    fn weekday_name(&self, weekday: Weekday) -> &str;

    /// Display text of a holiday. May span several lines.
    fn holiday_name(&self, holiday: Holiday) -> &str;

    /// Event text for `name` turning `age` on this day.
    fn birthday(&self, name: &str, age: i32) -> String;

    /// Event text for the couple `names` married `age` years on this day.
    fn anniversary(&self, names: &str, age: i32) -> String;
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Dutch (`nl_NL`) names.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dutch;

impl Locale for Dutch {
    fn tag(&self) -> &str {
        "nl"
    }

    fn month_name(&self, month: Month) -> &str {
        match month {
            Month::January => "januari",
            Month::February => "februari",
            Month::March => "maart",
            Month::April => "april",
            Month::May => "mei",
            Month::June => "juni",
            Month::July => "juli",
            Month::August => "augustus",
            Month::September => "september",
            Month::October => "oktober",
            Month::November => "november",
            Month::December => "december",
        }
    }

    fn month_abbreviation(&self, month: Month) -> &str {
        match month {
            Month::January => "jan",
            Month::February => "feb",
            Month::March => "mrt",
            Month::April => "apr",
            Month::May => "mei",
            Month::June => "jun",
            Month::July => "jul",
            Month::August => "aug",
            Month::September => "sep",
            Month::October => "okt",
            Month::November => "nov",
            Month::December => "dec",
        }
    }

    fn weekday_name(&self, weekday: Weekday) -> &str {
        match weekday {
            Weekday::Monday => "maandag",
            Weekday::Tuesday => "dinsdag",
            Weekday::Wednesday => "woensdag",
            Weekday::Thursday => "donderdag",
            Weekday::Friday => "vrijdag",
            Weekday::Saturday => "zaterdag",
            Weekday::Sunday => "zondag",
        }
    }

    fn holiday_name(&self, holiday: Holiday) -> &str {
        match holiday {
            Holiday::NewYear => "Nieuwjaar",
            Holiday::Epiphany => "Drie Koningen",
            Holiday::Valentine => "Valentijn",
            Holiday::KingsDay => "Koningsdag",
            Holiday::RemembranceDay => "Dodenherdenking",
            Holiday::LiberationDay => "Bevrijdingsdag",
            Holiday::SnackDay => "Frikandellendag",
            Holiday::AnimalDay => "Dierendag",
            Holiday::Sinterklaas => "Sinterklaas",
            Holiday::ChristmasDay => "Eerste Kerstdag",
            Holiday::SecondChristmasDay => "Tweede Kerstdag",
            Holiday::NewYearsEve => "Oudjaar",
            Holiday::SummerTime => "Zomertijd\nVergeet niet je klok niet een uur vooruit te zetten!",
            Holiday::MothersDay => "Moederdag",
            Holiday::FathersDay => "Vaderdag",
            Holiday::PrincesDay => "Prinsjesdag",
            Holiday::WinterTime => "Wintertijd\nVergeet niet je klok een uur terug te zetten!",
            Holiday::EasterSunday => "Eerste Paasdag",
            Holiday::GoodFriday => "Goede Vrijdag",
            Holiday::EasterMonday => "Tweede Paasdag",
            Holiday::Ascension => "Hemelvaart",
            Holiday::WhitSunday => "Eerste Pinksterdag",
            Holiday::WhitMonday => "Tweede Pinksterdag",
            Holiday::Carnival => "Carnaval",
        }
    }

    fn birthday(&self, name: &str, age: i32) -> String {
        format!("{name} {age} jaar")
    }

    fn anniversary(&self, names: &str, age: i32) -> String {
        format!("{names} {age} jaar getrouwd")
    }
}

/// English names.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Locale for English {
    fn tag(&self) -> &str {
        "en"
    }

    fn month_name(&self, month: Month) -> &str {
        match month {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    fn month_abbreviation(&self, month: Month) -> &str {
        match month {
            Month::January => "jan",
            Month::February => "feb",
            Month::March => "mar",
            Month::April => "apr",
            Month::May => "may",
            Month::June => "jun",
            Month::July => "jul",
            Month::August => "aug",
            Month::September => "sep",
            Month::October => "oct",
            Month::November => "nov",
            Month::December => "dec",
        }
    }

    fn weekday_name(&self, weekday: Weekday) -> &str {
        match weekday {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    fn holiday_name(&self, holiday: Holiday) -> &str {
        match holiday {
            Holiday::NewYear => "New Year",
            Holiday::Epiphany => "Epiphany",
            Holiday::Valentine => "Valentine's Day",
            Holiday::KingsDay => "King's Day",
            Holiday::RemembranceDay => "Remembrance Day",
            Holiday::LiberationDay => "Liberation Day",
            Holiday::SnackDay => "Snack Day",
            Holiday::AnimalDay => "Animal Day",
            Holiday::Sinterklaas => "Sinterklaas",
            Holiday::ChristmasDay => "Christmas Day",
            Holiday::SecondChristmasDay => "Second Christmas Day",
            Holiday::NewYearsEve => "New Year's Eve",
            Holiday::SummerTime => "Summer time\nDon't forget to set your clock forward one hour!",
            Holiday::MothersDay => "Mother's Day",
            Holiday::FathersDay => "Father's Day",
            Holiday::PrincesDay => "Prince's Day",
            Holiday::WinterTime => "Winter time\nDon't forget to set your clock back one hour!",
            Holiday::EasterSunday => "Easter Sunday",
            Holiday::GoodFriday => "Good Friday",
            Holiday::EasterMonday => "Easter Monday",
            Holiday::Ascension => "Ascension Day",
            Holiday::WhitSunday => "Whit Sunday",
            Holiday::WhitMonday => "Whit Monday",
            Holiday::Carnival => "Carnival",
        }
    }

    fn birthday(&self, name: &str, age: i32) -> String {
        format!("{name} {age} years")
    }

    fn anniversary(&self, names: &str, age: i32) -> String {
        format!("{names} {age} years married")
    }
}
