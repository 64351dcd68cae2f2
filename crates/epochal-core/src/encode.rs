//! Broken-down time to seconds since the epoch.
//!
//! Follows the POSIX "seconds since the Epoch" definition: every day is
//! 86400 seconds and leap years are those divisible by 4 but not by 100,
//! or divisible by 400.

use serde::{Deserialize, Serialize};

use crate::broken_down::{BrokenDownTime, EpochSeconds};
use crate::constants::{
    DAYS_TO_MONTH_START, EPOCH_DAY_OFFSET, FEBRUARY, REFERENCE_YEAR, SECONDS_PER_DAY,
};
use crate::error::{CalendarError, Result};
use crate::leap::{is_leap, leap_years_before};
use crate::weekday::{Weekday, weekday};

/// Result of encoding: the epoch value plus the two derived calendar fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoded {
    pub seconds: EpochSeconds,
    pub yday: u16,
    pub wday: Weekday,
}

/// Beyond this many years from the reference year no instant fits in `i64`
/// seconds; rejecting early keeps the intermediate arithmetic in range.
const MAX_ENCODABLE_YEAR_OFFSET: u64 = 292_277_026_596;

fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    let mut yday = day as i64 - 1 + DAYS_TO_MONTH_START[month as usize % 12] as i64;
    if month > FEBRUARY && is_leap(year) {
        yday += 1;
    }
    yday as u16
}

/// Days from 1970-01-01 to January 1st of `year` plus `yday`.
fn days_since_epoch(year: i64, yday: u16) -> i64 {
    yday as i64 + 365 * (year - REFERENCE_YEAR) - EPOCH_DAY_OFFSET
        + leap_years_before(year)
}

/// Seconds since the epoch for `tm`.
///
/// `tm.yday` and `tm.wday` are ignored. The other fields must lie within
/// their nominal calendar ranges for the given year and month; out-of-range
/// values produce an unspecified result rather than an error. Use
/// [`try_encode`] when the input has not been validated.
pub fn encode(tm: &BrokenDownTime) -> Encoded {
    let year = tm.full_year();
    let yday = day_of_year(year, tm.month, tm.day);
    let wday = weekday(year, tm.month, tm.day);
    let days = days_since_epoch(year, yday);

    Encoded {
        seconds: days * SECONDS_PER_DAY + tm.seconds_of_day(),
        yday,
        wday,
    }
}

/// Validating form of [`encode`]: rejects out-of-range fields and reports
/// overflow instead of wrapping.
pub fn try_encode(tm: &BrokenDownTime) -> Result<Encoded> {
    if tm.year.unsigned_abs() > MAX_ENCODABLE_YEAR_OFFSET {
        return Err(CalendarError::Overflow);
    }
    tm.validate()?;

    let year = tm.full_year();
    let yday = day_of_year(year, tm.month, tm.day);
    let wday = weekday(year, tm.month, tm.day);

    let days = year
        .checked_sub(REFERENCE_YEAR)
        .and_then(|offset| offset.checked_mul(365))
        .and_then(|d| d.checked_add(yday as i64 - EPOCH_DAY_OFFSET))
        .and_then(|d| d.checked_add(leap_years_before(year)))
        .ok_or(CalendarError::Overflow)?;
    let seconds = days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|s| s.checked_add(tm.seconds_of_day()))
        .ok_or(CalendarError::Overflow)?;

    Ok(Encoded {
        seconds,
        yday,
        wday,
    })
}
