//! Seconds since the epoch to broken-down time.
//!
//! [`decode`] resolves the year and month by scanning lengths produced by
//! the leap-year predicate. Whole 400-year cycles are stepped over first;
//! every such cycle is exactly 146097 days wherever it starts, so the scan
//! covers at most 400 years and every `i64` input decodes in bounded time.
//! Floor division is used everywhere, so instants before the epoch decode
//! the same way as those after it.
//!
//! [`decode_closed_form`] computes the same fields arithmetically and is
//! kept in lockstep with the scan by property tests.

use crate::broken_down::{BrokenDownTime, EpochSeconds};
use crate::constants::{
    DAYS_PER_400_YEARS, DAYS_TO_MONTH_START, EPOCH_WEEKDAY, EPOCH_YEAR, FEBRUARY, REFERENCE_YEAR,
    SECONDS_PER_DAY,
};
use crate::leap::{days_in_month, days_in_year, is_leap};
use crate::weekday::Weekday;

/// Time-of-day fields and weekday shared by both decoders.
struct DaySplit {
    days: i64,
    hour: u8,
    minute: u8,
    second: u8,
    wday: Weekday,
}

fn split(seconds: EpochSeconds) -> DaySplit {
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    let mut rem = seconds.rem_euclid(SECONDS_PER_DAY);

    let second = (rem % 60) as u8;
    rem /= 60;
    let minute = (rem % 60) as u8;
    let hour = (rem / 60) as u8;

    DaySplit {
        days,
        hour,
        minute,
        second,
        wday: Weekday::from_index(days + EPOCH_WEEKDAY),
    }
}

/// Broken-down UTC time for `seconds` since the epoch.
///
/// Total over `i64`. Runs in O(years mod 400) after the cycle skip.
pub fn decode(seconds: EpochSeconds) -> BrokenDownTime {
    let DaySplit {
        days,
        hour,
        minute,
        second,
        wday,
    } = split(seconds);

    let mut year = EPOCH_YEAR + 400 * days.div_euclid(DAYS_PER_400_YEARS);
    let mut day = days.rem_euclid(DAYS_PER_400_YEARS);

    loop {
        let len = days_in_year(year);
        if day < len {
            break;
        }
        day -= len;
        year += 1;
    }
    let yday = day as u16;

    let mut month = 0u8;
    while month < 11 {
        let len = days_in_month(year, month) as i64;
        if day < len {
            break;
        }
        day -= len;
        month += 1;
    }

    BrokenDownTime {
        year: year - REFERENCE_YEAR,
        month,
        day: day as u8 + 1,
        hour,
        minute,
        second,
        yday,
        wday,
    }
}

/// Closed-form equivalent of [`decode`], after Howard Hinnant's
/// `civil_from_days`. Produces identical output for every input.
pub fn decode_closed_form(seconds: EpochSeconds) -> BrokenDownTime {
    let DaySplit {
        days,
        hour,
        minute,
        second,
        wday,
    } = split(seconds);

    // Shift the epoch to 0000-03-01 so the leap day ends each computed year
    let z = days + 719_468;
    let era = z.div_euclid(DAYS_PER_400_YEARS);
    let doe = z.rem_euclid(DAYS_PER_400_YEARS);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let mday = doy - (153 * mp + 2) / 5 + 1;
    let month = (if mp < 10 { mp + 2 } else { mp - 10 }) as u8;
    let year = yoe + era * 400 + (month <= FEBRUARY) as i64;

    let mut yday = DAYS_TO_MONTH_START[month as usize] + mday as u16 - 1;
    if month > FEBRUARY && is_leap(year) {
        yday += 1;
    }

    BrokenDownTime {
        year: year - REFERENCE_YEAR,
        month,
        day: mday as u8,
        hour,
        minute,
        second,
        yday,
        wday,
    }
}
