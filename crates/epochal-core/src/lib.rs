//! Calendar time conversion engine.
//!
//! Converts between broken-down UTC calendar time and signed seconds since
//! 1970-01-01T00:00:00 using integer arithmetic only: Gregorian leap rules,
//! day-of-year and day-of-week, and the forward/reverse epoch mapping.
//!
//! Zero I/O. Every operation is a pure function returning an owned value.

pub mod broken_down;
pub mod clock;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod leap;
pub mod time;
pub mod weekday;

pub use broken_down::{BrokenDownTime, EpochSeconds};
pub use clock::{ClockSource, FixedClock, OffsetClock, UnavailableClock};
pub use constants::{EPOCH_YEAR, REFERENCE_YEAR, SECONDS_PER_DAY};
pub use decode::{decode, decode_closed_form};
pub use encode::{Encoded, encode, try_encode};
pub use error::{CalendarError, ClockError};
pub use leap::{days_in_month, days_in_year, is_leap, leap_years_before, leap_years_through};
pub use time::{epoch_to_iso8601, parse_datetime};
pub use weekday::{Weekday, weekday};
