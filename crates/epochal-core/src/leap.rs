//! Gregorian leap-year rules.
//!
//! All year arguments are full Gregorian years (2024, not 124). Division is
//! floored throughout so the rules extend proleptically to negative years.

use crate::constants::{DAYS_IN_MONTH, FEBRUARY, LEAP_CYCLE_ALIGNMENT, REFERENCE_YEAR};

/// Whether `year` is a Gregorian leap year.
pub fn is_leap(year: i64) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

/// Number of leap years in `(REFERENCE_YEAR, year]`.
///
/// Negative when `year` lies before the reference year: the count is then
/// minus the number of leap years in `(year, REFERENCE_YEAR]`, which keeps
/// differences between any two boundaries exact.
pub fn leap_years_through(year: i64) -> i64 {
    let offset = year - REFERENCE_YEAR;
    offset.div_euclid(4) - offset.div_euclid(100)
        + (offset + LEAP_CYCLE_ALIGNMENT).div_euclid(400)
}

/// Number of leap years strictly before `year`, counted from the reference year.
pub fn leap_years_before(year: i64) -> i64 {
    leap_years_through(year - 1)
}

pub fn days_in_year(year: i64) -> i64 {
    if is_leap(year) { 366 } else { 365 }
}

/// Length of `month` (0-based) in `year`. Returns 0 for a month outside [0, 11].
pub fn days_in_month(year: i64, month: u8) -> u8 {
    match DAYS_IN_MONTH.get(month as usize) {
        Some(&days) if month == FEBRUARY && is_leap(year) => days + 1,
        Some(&days) => days,
        None => 0,
    }
}
