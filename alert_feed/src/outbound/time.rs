//! system-clock implementation of [TimeGetter]

use crate::domain::ports::TimeGetter;
use chrono::{DateTime, Utc};

/// [TimeGetter] backed by the system clock. Toast ids are derived from the
/// time source, so anything but this impl belongs in tests only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeGetter for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
