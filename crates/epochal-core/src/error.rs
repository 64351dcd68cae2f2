use std::fmt;

/// A broken-down time that cannot be converted, or text that does not parse as one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    MonthOutOfRange(u8),
    DayOutOfRange { year: i64, month: u8, day: u8 },
    HourOutOfRange(u8),
    MinuteOutOfRange(u8),
    SecondOutOfRange(u8),
    /// The epoch value does not fit in 64 bits.
    Overflow,
    Parse(String),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::MonthOutOfRange(m) => write!(f, "month index {m} outside [0, 11]"),
            CalendarError::DayOutOfRange { year, month, day } => write!(
                f,
                "day {day} does not exist in {year:04}-{:02}",
                *month as u32 + 1
            ),
            CalendarError::HourOutOfRange(h) => write!(f, "hour {h} outside [0, 23]"),
            CalendarError::MinuteOutOfRange(m) => write!(f, "minute {m} outside [0, 59]"),
            CalendarError::SecondOutOfRange(s) => write!(f, "second {s} outside [0, 59]"),
            CalendarError::Overflow => write!(f, "seconds since the epoch overflow i64"),
            CalendarError::Parse(msg) => write!(f, "invalid date/time: {msg}"),
        }
    }
}

impl std::error::Error for CalendarError {}

/// The clock source could not produce a reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    Unavailable(String),
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::Unavailable(reason) => write!(f, "clock unavailable: {reason}"),
        }
    }
}

impl std::error::Error for ClockError {}

pub type Result<T> = std::result::Result<T, CalendarError>;
