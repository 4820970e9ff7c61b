//! Cancellable repeating timer driven by an external clock.
//!
//! The timer never reads the system clock. Callers pass the current time as a
//! [`Duration`] measured from any fixed origin (the GUI uses the session start)
//! and ask how many periods have elapsed since the last poll. This keeps every
//! carousel deterministic under test.

use std::time::Duration;

use crate::error::{CoreError, Result};

/// A repeating deadline that can be armed, polled, and cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTimer {
    interval: Duration,
    next_due: Option<Duration>,
}

impl RepeatingTimer {
    /// Create a disarmed timer. A zero interval is rejected.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(CoreError::ZeroInterval);
        }
        Ok(Self {
            interval,
            next_due: None,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Time of the next firing, if armed.
    pub fn next_due(&self) -> Option<Duration> {
        self.next_due
    }

    /// Start (or restart) the period at `now`. The first firing is one full
    /// interval later.
    pub fn arm(&mut self, now: Duration) {
        self.next_due = now.checked_add(self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Number of periods that elapsed up to `now`.
    ///
    /// Returns 0 when disarmed or not yet due. After firing, the next deadline
    /// stays on the original grid, so polling late never drifts the schedule.
    pub fn poll(&mut self, now: Duration) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }

        let late = (now - due).as_nanos() / self.interval.as_nanos();
        let fires = u32::try_from(late.saturating_add(1)).unwrap_or(u32::MAX);
        self.next_due = self
            .interval
            .checked_mul(fires)
            .and_then(|advance| due.checked_add(advance));
        fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert_eq!(RepeatingTimer::new(Duration::ZERO), Err(CoreError::ZeroInterval));
    }

    #[test]
    fn disarmed_timer_never_fires() {
        let mut timer = RepeatingTimer::new(ms(100)).unwrap();
        assert_eq!(timer.poll(ms(10_000)), 0);
    }

    #[test]
    fn fires_once_per_period() {
        let mut timer = RepeatingTimer::new(ms(6000)).unwrap();
        timer.arm(ms(0));
        assert_eq!(timer.poll(ms(5999)), 0);
        assert_eq!(timer.poll(ms(6000)), 1);
        assert_eq!(timer.poll(ms(6001)), 0);
        assert_eq!(timer.next_due(), Some(ms(12_000)));
    }

    #[test]
    fn late_poll_reports_every_missed_period() {
        let mut timer = RepeatingTimer::new(ms(6000)).unwrap();
        timer.arm(ms(0));
        assert_eq!(timer.poll(ms(12_001)), 2);
        assert_eq!(timer.next_due(), Some(ms(18_000)));
    }

    #[test]
    fn rearm_restarts_the_period() {
        let mut timer = RepeatingTimer::new(ms(4000)).unwrap();
        timer.arm(ms(0));
        timer.arm(ms(3000));
        assert_eq!(timer.poll(ms(4000)), 0);
        assert_eq!(timer.poll(ms(7000)), 1);
    }

    #[test]
    fn cancel_disarms() {
        let mut timer = RepeatingTimer::new(ms(100)).unwrap();
        timer.arm(ms(0));
        timer.cancel();
        assert!(!timer.is_armed());
        assert_eq!(timer.poll(ms(500)), 0);
    }
}
