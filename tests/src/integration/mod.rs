//! Cross-crate integration flows.

pub mod metrics_flow;

use chrono::{DateTime, Duration, TimeZone, Utc};
use explorer_types::Address;
use parking_lot::Mutex;
use validator_sync::Clock;

/// Deterministic clock advancing one second per read, so timestamp
/// assertions never depend on wall-clock resolution.
pub struct TickingClock {
    now: Mutex<DateTime<Utc>>,
}

impl TickingClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
        }
    }

    /// Clock starting `offset_secs` after the default origin, for a
    /// follow-up pass that must observe earlier timestamps as the past.
    pub fn offset_by(offset_secs: i64) -> Self {
        let clock = Self::new();
        *clock.now.lock() += Duration::seconds(offset_secs);
        clock
    }
}

impl Default for TickingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut guard = self.now.lock();
        let current = *guard;
        *guard += Duration::seconds(1);
        current
    }
}

/// Shorthand for a test address with a recognizable byte pattern.
pub fn addr(byte: u8) -> Address {
    Address([byte; 20])
}
