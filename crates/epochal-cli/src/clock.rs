//! Host clock and the configured clock chain.

use std::time::{SystemTime, UNIX_EPOCH};

use epochal_core::{
    ClockError, ClockSource, EpochSeconds, FixedClock, OffsetClock, UnavailableClock,
};

use crate::config::{ClockConfig, ClockKind};

/// Host wall clock, floored to whole seconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> Result<EpochSeconds, ClockError> {
        let overflow = || ClockError::Unavailable("system time out of range".to_string());
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_secs()).map_err(|_| overflow()),
            Err(e) => {
                let before = e.duration();
                let whole = i64::try_from(before.as_secs()).map_err(|_| overflow())?;
                let partial = (before.subsec_nanos() > 0) as i64;
                Ok(-whole - partial)
            }
        }
    }
}

/// Build the clock described by `config`, offset included.
pub fn from_config(config: &ClockConfig) -> OffsetClock<Box<dyn ClockSource>> {
    let inner: Box<dyn ClockSource> = match config.source {
        ClockKind::System => Box::new(SystemClock),
        ClockKind::Fixed => Box::new(FixedClock(config.fixed)),
        ClockKind::Unavailable => Box::new(UnavailableClock),
    };
    if config.offset != 0 {
        tracing::debug!("applying clock offset {}s", config.offset);
    }
    OffsetClock::new(inner, config.offset)
}
