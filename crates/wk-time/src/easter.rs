//! Easter Sunday and the movable feasts reckoned from it.

use crate::date::Date;
use crate::weekday::Weekday;

/// Non-Sunday days of Lent counted back from Easter.
const LENT_DAYS: u32 = 40;

/// Gregorian Easter Sunday of `year`.
///
/// Uses Oudin's algorithm, valid for every Gregorian year.
///
/// # Panics
/// Panics in debug builds if `year` is outside the supported date range.
pub fn easter_sunday(year: u16) -> Date {
    let y = year as i32;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    debug_assert!((Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year));
    Date::from_ymd_unchecked(year, month as u8, day as u8)
}

/// The Carnival anchor for the Easter Sunday `easter`.
///
/// Walks back from Easter one day at a time; every day that is not a
/// Sunday counts towards the forty days of Lent. The walk ends one day past
/// the fortieth counted day (Ash Wednesday), so the anchor is Shrove
/// Tuesday, the last of the three days of Carnival.
pub fn carnival_anchor(easter: Date) -> Date {
    let mut date = easter;
    let mut remaining = LENT_DAYS;
    while remaining > 0 {
        if date.weekday() != Weekday::Sunday {
            remaining -= 1;
        }
        date -= 1;
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_sundays() {
        let known = [
            (1900, 4, 15),
            (1954, 4, 18),
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2016, 3, 27),
            (2019, 4, 21),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2038, 4, 25),
            (2285, 3, 22),
        ];
        for (y, m, d) in known {
            assert_eq!(easter_sunday(y), date(y, m, d), "Easter {y}");
        }
    }

    #[test]
    fn easter_is_a_sunday_in_window() {
        for y in 1583..=2500 {
            let e = easter_sunday(y);
            assert_eq!(e.weekday(), Weekday::Sunday, "Easter {y}");
            assert!(e >= date(y, 3, 22) && e <= date(y, 4, 25), "Easter {y}: {e}");
        }
    }

    #[test]
    fn carnival_anchor_is_shrove_tuesday() {
        // Easter 2024-03-31, Ash Wednesday 2024-02-14.
        assert_eq!(carnival_anchor(date(2024, 3, 31)), date(2024, 2, 13));
        // Easter 2016-03-27, Ash Wednesday 2016-02-10.
        assert_eq!(carnival_anchor(date(2016, 3, 27)), date(2016, 2, 9));
        for y in 1900..=2100 {
            let anchor = carnival_anchor(easter_sunday(y));
            assert_eq!(anchor.weekday(), Weekday::Tuesday, "Carnival {y}");
            assert_eq!(anchor.days_between(easter_sunday(y)), 47);
        }
    }
}
