// SPDX-License-Identifier: MPL-2.0
//! One-shot deadline timer.
//!
//! A `Timer` is the banner's cancellation token: arming records a deadline,
//! cancelling forgets it. Nothing runs on its own; the owner polls
//! [`Timer::fire_if_due`] with the current instant and acts when it returns
//! `true`. A fired or cancelled timer is idle, and cancelling an idle timer
//! is a no-op.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the timer to fire `delay` after `now`, replacing any
    /// previous deadline.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Cancels the pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consumes the deadline if it has been reached.
    ///
    /// Returns `true` exactly once per arming.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_idle() {
        let timer = Timer::new();
        assert!(!timer.is_pending());
        assert!(timer.deadline().is_none());
    }

    #[test]
    fn fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = Timer::new();
        timer.arm(start, Duration::from_millis(200));

        assert!(!timer.fire_if_due(start + Duration::from_millis(199)));
        assert!(timer.fire_if_due(start + Duration::from_millis(200)));
        assert!(!timer.fire_if_due(start + Duration::from_millis(500)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timer = Timer::new();
        timer.arm(start, Duration::from_millis(10));

        assert!(timer.cancel());
        assert!(!timer.fire_if_due(start + Duration::from_secs(60)));
    }

    #[test]
    fn cancel_is_a_no_op_when_idle_or_fired() {
        let start = Instant::now();
        let mut timer = Timer::new();
        assert!(!timer.cancel());

        timer.arm(start, Duration::ZERO);
        assert!(timer.fire_if_due(start));
        assert!(!timer.cancel());
    }

    #[test]
    fn rearming_replaces_deadline() {
        let start = Instant::now();
        let mut timer = Timer::new();
        timer.arm(start, Duration::from_millis(100));
        timer.arm(start, Duration::from_millis(300));

        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(300)));
        assert!(!timer.fire_if_due(start + Duration::from_millis(150)));
    }
}
