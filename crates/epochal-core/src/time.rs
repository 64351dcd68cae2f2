//! Text forms of broken-down time.
//!
//! `Display` gives the `date` command layout, `YYYY-MM-DD HH:MM:SS UTC`.
//! [`BrokenDownTime::to_iso8601`] gives `YYYY-MM-DDTHH:MM:SSZ`. Parsing
//! accepts either of those, a space or `T` separator, or a bare date.

use std::fmt;
use std::str::FromStr;

use crate::broken_down::{BrokenDownTime, EpochSeconds};
use crate::constants::REFERENCE_YEAR;
use crate::decode::decode;
use crate::encode::try_encode;
use crate::error::CalendarError;
use crate::weekday::Weekday;

impl fmt::Display for BrokenDownTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
            self.full_year(),
            self.month as u32 + 1,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

impl BrokenDownTime {
    pub fn to_iso8601(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.full_year(),
            self.month as u32 + 1,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

/// Convert seconds since the epoch to an ISO-8601 UTC string.
pub fn epoch_to_iso8601(seconds: EpochSeconds) -> String {
    decode(seconds).to_iso8601()
}

fn parse_field<T: FromStr>(text: &str, what: &str) -> Result<T, CalendarError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::Parse(format!("{what} '{text}' is not a number")));
    }
    text.parse()
        .map_err(|_| CalendarError::Parse(format!("{what} '{text}' out of range")))
}

/// Split `a<sep>b<sep>c` into exactly three parts.
fn three_parts<'a>(text: &'a str, sep: char, what: &str) -> Result<[&'a str; 3], CalendarError> {
    let mut parts = text.split(sep);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), Some(c), None) => Ok([a, b, c]),
        _ => Err(CalendarError::Parse(format!(
            "expected {what} separated by '{sep}', got '{text}'"
        ))),
    }
}

/// Parse and validate `text`, returning the broken-down time with its
/// derived fields filled in, plus its seconds since the epoch.
pub fn parse_datetime(text: &str) -> Result<(BrokenDownTime, EpochSeconds), CalendarError> {
    let s = text.trim();
    let s = s
        .strip_suffix(" UTC")
        .or_else(|| s.strip_suffix('Z'))
        .unwrap_or(s);

    let (date, time) = match s.find(['T', ' ']) {
        Some(pos) => (&s[..pos], Some(s[pos + 1..].trim_start())),
        None => (s, None),
    };

    // A leading '-' belongs to the year, not the separator
    let (negative, date) = match date.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, date),
    };
    let [y, m, d] = three_parts(date, '-', "year, month, day")?;
    let mut year: i64 = parse_field(y, "year")?;
    if negative {
        year = -year;
    }
    let month: u8 = parse_field(m, "month")?;
    if month == 0 {
        return Err(CalendarError::Parse(format!(
            "month '{m}' outside 01..=12 in '{text}'"
        )));
    }
    if month > 12 {
        return Err(CalendarError::MonthOutOfRange(month - 1));
    }
    let day: u8 = parse_field(d, "day")?;

    let (hour, minute, second) = match time {
        Some(time) => {
            let [h, mi, se] = three_parts(time, ':', "hour, minute, second")?;
            (
                parse_field(h, "hour")?,
                parse_field(mi, "minute")?,
                parse_field(se, "second")?,
            )
        }
        None => (0, 0, 0),
    };

    let mut tm = BrokenDownTime {
        year: year
            .checked_sub(REFERENCE_YEAR)
            .ok_or(CalendarError::Overflow)?,
        month: month - 1,
        day,
        hour,
        minute,
        second,
        yday: 0,
        wday: Weekday::Sunday,
    };
    let encoded = try_encode(&tm)?;
    tm.yday = encoded.yday;
    tm.wday = encoded.wday;
    Ok((tm, encoded.seconds))
}

impl FromStr for BrokenDownTime {
    type Err = CalendarError;

    /// See [`parse_datetime`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_datetime(s).map(|(tm, _)| tm)
    }
}
