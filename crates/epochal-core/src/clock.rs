//! Clock sources: where "now" comes from.
//!
//! The engine itself never reads a clock. Front-ends pick a [`ClockSource`]
//! and wrap it in an [`OffsetClock`] to apply the system clock offset.

use crate::broken_down::EpochSeconds;
use crate::error::ClockError;

pub trait ClockSource {
    /// Current time in seconds since the epoch.
    fn now(&self) -> Result<EpochSeconds, ClockError>;
}

/// Always reports the same instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub EpochSeconds);

impl ClockSource for FixedClock {
    fn now(&self) -> Result<EpochSeconds, ClockError> {
        Ok(self.0)
    }
}

/// A platform with no readable clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableClock;

impl ClockSource for UnavailableClock {
    fn now(&self) -> Result<EpochSeconds, ClockError> {
        Err(ClockError::Unavailable("no clock source configured".to_string()))
    }
}

/// Adds a signed correction to every reading of the inner clock.
#[derive(Clone, Copy, Debug)]
pub struct OffsetClock<C> {
    inner: C,
    offset: i64,
}

impl<C: ClockSource> OffsetClock<C> {
    pub fn new(inner: C, offset: i64) -> Self {
        Self { inner, offset }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl<C: ClockSource> ClockSource for OffsetClock<C> {
    fn now(&self) -> Result<EpochSeconds, ClockError> {
        let raw = self.inner.now()?;
        raw.checked_add(self.offset).ok_or_else(|| {
            ClockError::Unavailable(format!("offset {} overflows reading {raw}", self.offset))
        })
    }
}

impl<C: ClockSource + ?Sized> ClockSource for Box<C> {
    fn now(&self) -> Result<EpochSeconds, ClockError> {
        (**self).now()
    }
}
