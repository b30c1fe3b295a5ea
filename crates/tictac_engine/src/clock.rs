use std::cell::Cell;
use std::time::{Duration, Instant};

/// Time source for a single search, measured from the search's start.
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Deterministic clock that advances by `step` every time it is read.
///
/// A zero step never runs out of time, which makes a search exhaustive up to
/// its depth limit.
#[derive(Debug)]
pub struct StepClock {
    step: Duration,
    reads: Cell<u32>,
}

impl StepClock {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            reads: Cell::new(0),
        }
    }

    pub fn frozen() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl Clock for StepClock {
    fn elapsed(&self) -> Duration {
        let reads = self.reads.get();
        self.reads.set(reads.saturating_add(1));
        self.step.saturating_mul(reads)
    }
}

// Tracks the budget of one search against its clock
pub(crate) struct TimeManager<'a> {
    clock: &'a dyn Clock,
    budget: Duration,
}

impl<'a> TimeManager<'a> {
    pub(crate) fn new(clock: &'a dyn Clock, budget: Duration) -> Self {
        Self { clock, budget }
    }

    pub(crate) fn is_expired(&self) -> bool {
        self.clock.elapsed() > self.budget
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clock_advances_per_read() {
        let clock = StepClock::new(Duration::from_millis(10));
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(clock.elapsed(), Duration::from_millis(10));
        assert_eq!(clock.elapsed(), Duration::from_millis(20));
        assert_eq!(clock.reads(), 3);
    }

    #[test]
    fn test_time_manager_expires_strictly_after_budget() {
        let clock = StepClock::new(Duration::from_millis(10));
        let time = TimeManager::new(&clock, Duration::from_millis(20));
        assert!(!time.is_expired()); // 0ms
        assert!(!time.is_expired()); // 10ms
        assert!(!time.is_expired()); // 20ms
        assert!(time.is_expired()); // 30ms
    }

    #[test]
    fn test_frozen_clock_never_expires() {
        let clock = StepClock::frozen();
        let time = TimeManager::new(&clock, Duration::ZERO);
        for _ in 0..100 {
            assert!(!time.is_expired());
        }
    }
}
