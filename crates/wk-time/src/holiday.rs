//! `Holiday`: the named days the holiday rules can produce.
//!
//! The enum identifies a holiday independently of language; display text
//! comes from a [`Locale`](crate::locale::Locale).

/// A named holiday or observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Holiday {
    // ── Fixed dates ──────────────────────────────────────────────────────────
    /// New Year's Day (Jan 1).
    NewYear,
    /// Epiphany (Jan 6).
    Epiphany,
    /// Valentine's Day (Feb 14).
    Valentine,
    /// King's Day (Apr 27).
    KingsDay,
    /// Remembrance of the Dead (May 4).
    RemembranceDay,
    /// Liberation Day (May 5).
    LiberationDay,
    /// Snack Day (Jul 29).
    SnackDay,
    /// World Animal Day (Oct 4).
    AnimalDay,
    /// Sinterklaas eve (Dec 5).
    Sinterklaas,
    /// First Christmas Day (Dec 25).
    ChristmasDay,
    /// Second Christmas Day (Dec 26).
    SecondChristmasDay,
    /// New Year's Eve (Dec 31).
    NewYearsEve,

    // ── Weekday of month ─────────────────────────────────────────────────────
    /// Start of daylight saving time (last Sunday of March).
    SummerTime,
    /// Mother's Day (second Sunday of May).
    MothersDay,
    /// Father's Day (third Sunday of June).
    FathersDay,
    /// Prince's Day, the state opening of parliament (third Tuesday of
    /// September).
    PrincesDay,
    /// End of daylight saving time (last Sunday of October).
    WinterTime,

    // ── Easter cycle ─────────────────────────────────────────────────────────
    /// Easter Sunday.
    EasterSunday,
    /// Good Friday (Easter − 2).
    GoodFriday,
    /// Easter Monday (Easter + 1).
    EasterMonday,
    /// Ascension Day (Easter + 39).
    Ascension,
    /// Whit Sunday (Easter + 49).
    WhitSunday,
    /// Whit Monday (Easter + 50).
    WhitMonday,
    /// Carnival (the three days before Ash Wednesday).
    Carnival,
}
