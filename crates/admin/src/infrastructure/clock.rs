//! Clocks for pre-filling date-time annotation inputs.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use crate::infrastructure::ports::ClockPort;

/// Reads the operating system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Current time as shown on a wall clock at `offset`.
///
/// Date and time inputs are entered in this local time; the annotation
/// record converts it back to UTC.
pub fn wall_clock_now(clock: &dyn ClockPort, offset: FixedOffset) -> NaiveDateTime {
    clock.now().with_timezone(&offset).naive_local()
}

#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
