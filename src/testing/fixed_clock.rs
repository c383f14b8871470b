use std::cell::Cell;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::ports::Clock;

/// Clock that returns a settable instant and advances one millisecond per read.
#[allow(dead_code)]
pub struct FixedClock {
    millis: Cell<i64>,
}

#[allow(dead_code)]
impl FixedClock {
    pub fn at(millis: i64) -> Self {
        Self { millis: Cell::new(millis) }
    }

    pub fn set(&self, millis: i64) {
        self.millis.set(millis);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        let millis = self.millis.get();
        self.millis.set(millis + 1);
        Utc.timestamp_millis_opt(millis).unwrap().with_timezone(&Local)
    }
}
