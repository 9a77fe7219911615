//! Strictly increasing timestamps for new and updated records.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Wall clock truncated to microseconds that never repeats a value.
///
/// History is ordered by creation time, so two inserts landing in the same
/// microsecond would otherwise tie.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last_micros: AtomicI64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock whose next reading is later than `micros`
    pub fn starting_after(micros: i64) -> Self {
        Self {
            last_micros: AtomicI64::new(micros),
        }
    }

    /// Next timestamp
    pub fn now(&self) -> DateTime<Utc> {
        let wall = Utc::now().timestamp_micros();
        let mut prev = self.last_micros.load(Ordering::Acquire);
        loop {
            let next = wall.max(prev.saturating_add(1));
            match self.last_micros.compare_exchange_weak(
                prev,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return DateTime::from_timestamp_micros(next).unwrap_or_else(Utc::now),
                Err(actual) => prev = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readings_strictly_increase() {
        let clock = MonotonicClock::new();
        let mut prev = clock.now();
        for _ in 0..1000 {
            let next = clock.now();
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn test_starting_after_future_value() {
        let future = Utc::now().timestamp_micros() + 60_000_000;
        let clock = MonotonicClock::starting_after(future);
        assert_eq!(clock.now().timestamp_micros(), future + 1);
    }
}
