/// Year that `BrokenDownTime::year` is counted from (the `struct tm` convention).
pub const REFERENCE_YEAR: i64 = 1900;

/// Year of the epoch instant 1970-01-01T00:00:00 UTC.
pub const EPOCH_YEAR: i64 = 1970;

/// Days from 1900-01-01 to 1970-01-01: 70 * 365 + 17 leap days.
pub const EPOCH_DAY_OFFSET: i64 = 25_567;

/// 1970-01-01 was a Thursday (Sunday = 0).
pub const EPOCH_WEEKDAY: i64 = 4;

/// Shift applied to the year offset before the 400-year term of the leap
/// accumulator. With a 1900 reference, 2000 is the first 400-year leap year,
/// so `(year_offset + 300) / 400` steps at offset 100.
pub const LEAP_CYCLE_ALIGNMENT: i64 = 300;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Length of one full Gregorian cycle: 400 * 365 + 97 leap days.
pub const DAYS_PER_400_YEARS: i64 = 146_097;

/// Days from start of year until start of each month (non-leap year).
pub const DAYS_TO_MONTH_START: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days in each month (non-leap year).
pub const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Per-month phase for the day-of-week calculation.
pub const MONTH_WEEKDAY_PHASE: [u8; 12] = [1, 4, 3, 6, 1, 4, 6, 2, 5, 0, 3, 5];

/// Index of February in the 0-based month numbering.
pub const FEBRUARY: u8 = 1;
