use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MONTH_WEEKDAY_PHASE, REFERENCE_YEAR};
use crate::leap::leap_years_through;

/// Day of the week, numbered from Sunday = 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Map any integer onto a weekday, reducing it modulo 7 first.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Three-letter English abbreviation.
    pub fn abbrev(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Day of the week for a Gregorian date.
///
/// `month` is 0-based and `day` 1-based. January and February are counted
/// against the previous year so that the current year's leap day only shifts
/// dates after it.
pub fn weekday(year: i64, month: u8, day: u8) -> Weekday {
    let mut pseudo_year = year;
    if month < 2 {
        pseudo_year -= 1;
    }
    let phase = MONTH_WEEKDAY_PHASE[month as usize % 12] as i64;
    Weekday::from_index(
        (pseudo_year - REFERENCE_YEAR) + leap_years_through(pseudo_year) + phase + day as i64,
    )
}
