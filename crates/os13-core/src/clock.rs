//! Wall-clock seam for `date` and timestamped templates.
//!
//! Scheduling never reads this; it runs on the `now_ms` the surface passes in.

use chrono::{DateTime, Local, TimeZone};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self(at)
    }

    /// A fixed local instant, falling back to the epoch if the local zone
    /// cannot represent it.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let at = Local
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .earliest()
            .unwrap_or_else(|| Local.timestamp_opt(0, 0).earliest().unwrap_or_default());
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
