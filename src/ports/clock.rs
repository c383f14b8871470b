use chrono::{DateTime, Local};

/// Port for reading the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Current time as milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}
