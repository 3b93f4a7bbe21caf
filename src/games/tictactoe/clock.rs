//! Wall-clock access for winner-log timestamps.

use chrono::{Local, NaiveTime, Timelike, Utc};

/// Source of the time of day stamped on win events.
pub trait Clock {
    /// Current time of day.
    fn now(&self) -> NaiveTime;
}

/// Reads the system clock, in local time or UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_new::new)]
pub struct SystemClock {
    utc: bool,
}

impl SystemClock {
    /// Clock reporting local time.
    pub fn local() -> Self {
        Self::new(false)
    }

    /// Clock reporting UTC.
    pub fn utc() -> Self {
        Self::new(true)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        if self.utc {
            Utc::now().time()
        } else {
            Local::now().time()
        }
    }
}

/// Clock frozen at one time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct FixedClock {
    time: NaiveTime,
}

impl FixedClock {
    /// Clock frozen at `hour:minute`.
    ///
    /// Out-of-range values fall back to midnight.
    pub fn at(hour: u32, minute: u32) -> Self {
        Self::new(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.time
    }
}

/// Formats a time of day as `H:MMam` / `H:MMpm`.
///
/// Midnight and noon both read as 12.
pub fn format_clock_time(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    let suffix = if pm { "pm" } else { "am" };
    format!("{}:{:02}{}", hour, time.minute(), suffix)
}
