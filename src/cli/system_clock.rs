use chrono::{DateTime, Utc};
use shiftbook_core::Clock;

/// Wall-clock time for the shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
