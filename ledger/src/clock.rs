use crate::traits::Clock;
use chrono::{DateTime, Utc};

/// The default [Clock], backed by the system clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
