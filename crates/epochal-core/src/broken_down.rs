use serde::{Deserialize, Serialize};

use crate::constants::REFERENCE_YEAR;
use crate::decode::decode;
use crate::encode::encode;
use crate::error::{CalendarError, Result};
use crate::leap::days_in_month;
use crate::weekday::Weekday;

/// Signed count of seconds since 1970-01-01T00:00:00 UTC, leap seconds excluded.
pub type EpochSeconds = i64;

/// Calendar representation of an instant, in the shape of C's `struct tm`.
///
/// `yday` and `wday` are derived: they are written by [`decode`] and
/// [`BrokenDownTime::to_epoch`], and ignored by the encoder. Ordering is
/// chronological for values whose derived fields are consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BrokenDownTime {
    /// Years since 1900.
    pub year: i64,
    /// Month of year, 0-based.
    pub month: u8,
    /// Day of month, 1-based.
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Days since January 1st, 0-based.
    pub yday: u16,
    pub wday: Weekday,
}

impl BrokenDownTime {
    /// Build from a full Gregorian year and 0-based month.
    /// Derived fields start zeroed until the value is encoded.
    pub fn new(full_year: i64, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year: full_year - REFERENCE_YEAR,
            month,
            day,
            hour,
            minute,
            second,
            yday: 0,
            wday: Weekday::Sunday,
        }
    }

    /// Midnight at the start of the given date.
    pub fn date(full_year: i64, month: u8, day: u8) -> Self {
        Self::new(full_year, month, day, 0, 0, 0)
    }

    pub fn full_year(&self) -> i64 {
        self.year.saturating_add(REFERENCE_YEAR)
    }

    /// Check every caller-supplied field against its calendar range.
    pub fn validate(&self) -> Result<()> {
        if self.month > 11 {
            return Err(CalendarError::MonthOutOfRange(self.month));
        }
        let year = self.full_year();
        if self.day == 0 || self.day > days_in_month(year, self.month) {
            return Err(CalendarError::DayOutOfRange {
                year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 {
            return Err(CalendarError::HourOutOfRange(self.hour));
        }
        if self.minute > 59 {
            return Err(CalendarError::MinuteOutOfRange(self.minute));
        }
        if self.second > 59 {
            return Err(CalendarError::SecondOutOfRange(self.second));
        }
        Ok(())
    }

    /// Seconds since the epoch, filling in `yday` and `wday` as a side effect.
    ///
    /// Fields must already be in range; see [`BrokenDownTime::validate`].
    pub fn to_epoch(&mut self) -> EpochSeconds {
        let encoded = encode(self);
        self.yday = encoded.yday;
        self.wday = encoded.wday;
        encoded.seconds
    }

    pub fn from_epoch(seconds: EpochSeconds) -> Self {
        decode(seconds)
    }

    pub fn seconds_of_day(&self) -> i64 {
        (self.hour as i64 * 60 + self.minute as i64) * 60 + self.second as i64
    }
}
