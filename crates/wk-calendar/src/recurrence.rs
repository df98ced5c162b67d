//! Birthdays and wedding anniversaries recurring on a date.
//!
//! An entry recurs on every date with the same month and day as the entry's
//! own date. The year is only used for the age. Entries dated February 29
//! therefore recur in leap years only.

use wk_time::Date;

use crate::tables::{Birthdays, Weddings};

/// Separator placed between the names of a couple.
pub const COUPLE_SEPARATOR: &str = " & ";

/// Someone's birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayEvent<'a> {
    /// Name of the person.
    pub name: &'a str,
    /// Age reached on the date; zero in the year of birth.
    pub age: i32,
}

/// A couple's wedding anniversary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnniversaryEvent {
    /// All names of the couple joined by [`COUPLE_SEPARATOR`].
    pub names: String,
    /// Years married on the date.
    pub age: i32,
}

/// Years from the year of `since` to the year of `on`.
fn years_between(since: Date, on: Date) -> i32 {
    i32::from(on.year()) - i32::from(since.year())
}

/// Birthdays on `date`, one event per name, in table order.
pub fn birthdays_on(date: Date, birthdays: &Birthdays) -> impl Iterator<Item = BirthdayEvent<'_>> {
    birthdays
        .iter()
        .filter(move |(born, _)| born.same_month_day(&date))
        .flat_map(move |(born, names)| {
            let age = years_between(born, date);
            names.iter().map(move |name| BirthdayEvent {
                name: name.as_str(),
                age,
            })
        })
}

/// Wedding anniversaries on `date`, one event per couple, in table order.
pub fn anniversaries_on(date: Date, weddings: &Weddings) -> impl Iterator<Item = AnniversaryEvent> + '_ {
    weddings
        .iter()
        .filter(move |(married, _)| married.same_month_day(&date))
        .flat_map(move |(married, couples)| {
            let age = years_between(married, date);
            couples.iter().map(move |couple| AnniversaryEvent {
                names: couple.join(COUPLE_SEPARATOR),
                age,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn birthday_age() {
        let mut table = Birthdays::new();
        table.add(date(1991, 1, 11), "A");
        let events: Vec<_> = birthdays_on(date(2016, 1, 11), &table).collect();
        assert_eq!(events, vec![BirthdayEvent { name: "A", age: 25 }]);
        assert_eq!(birthdays_on(date(2016, 1, 12), &table).count(), 0);
    }

    #[test]
    fn shared_birthdays_in_table_order() {
        let mut table = Birthdays::new();
        table.add(date(1990, 3, 1), "B");
        table.add(date(1980, 3, 1), "C");
        table.add(date(1990, 3, 1), "D");
        let names: Vec<_> = birthdays_on(date(2020, 3, 1), &table)
            .map(|e| (e.name, e.age))
            .collect();
        assert_eq!(names, vec![("B", 30), ("D", 30), ("C", 40)]);
    }

    #[test]
    fn age_zero_and_negative() {
        let mut table = Birthdays::new();
        table.add(date(2016, 1, 11), "Baby");
        let on_birth: Vec<_> = birthdays_on(date(2016, 1, 11), &table).collect();
        assert_eq!(on_birth[0].age, 0);
        let before: Vec<_> = birthdays_on(date(2015, 1, 11), &table).collect();
        assert_eq!(before[0].age, -1);
    }

    #[test]
    fn leap_day_birthdays() {
        let mut table = Birthdays::new();
        table.add(date(2000, 2, 29), "Leap");
        assert_eq!(birthdays_on(date(2024, 2, 29), &table).count(), 1);
        assert_eq!(birthdays_on(date(2023, 2, 28), &table).count(), 0);
        assert_eq!(birthdays_on(date(2023, 3, 1), &table).count(), 0);
    }

    #[test]
    fn anniversary_joins_names() {
        let mut table = Weddings::new();
        table.add(date(2006, 6, 6), ["Husband", "Wife"]);
        table.add(date(2006, 6, 6), ["X", "Y", "Z"]);
        let events: Vec<_> = anniversaries_on(date(2016, 6, 6), &table).collect();
        assert_eq!(
            events,
            vec![
                AnniversaryEvent {
                    names: "Husband & Wife".into(),
                    age: 10
                },
                AnniversaryEvent {
                    names: "X & Y & Z".into(),
                    age: 10
                },
            ]
        );
        assert_eq!(anniversaries_on(date(2016, 6, 7), &table).count(), 0);
    }
}
