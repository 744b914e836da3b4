use chrono::{DateTime, Utc};

use crate::domain::Clock;

/// Wall clock; the shell's only time source outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
