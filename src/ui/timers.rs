//! Debounce and throttle as small stateful objects with explicit lifecycle
//! operations, instead of timers captured in closures.

use std::time::{Duration, Instant};

/// Collapses a burst of triggers into one firing after a quiet period.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Arms (or re-arms) the timer; each trigger pushes the deadline out.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// Returns true exactly once when the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn reset(&mut self) {
        self.cancel();
    }
}

/// Lets a call through at most once per limit window, with one trailing
/// call for triggers that arrived while throttled.
#[derive(Debug)]
pub struct Throttler {
    limit: Duration,
    last_run: Option<Instant>,
    trailing: Option<Instant>,
}

impl Throttler {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            last_run: None,
            trailing: None,
        }
    }

    /// Returns true when the call may run now; otherwise schedules a
    /// trailing run at the end of the current window.
    pub fn try_run(&mut self, now: Instant) -> bool {
        match self.last_run {
            Some(last) if now.duration_since(last) < self.limit => {
                self.trailing = Some(last + self.limit);
                false
            }
            _ => {
                self.last_run = Some(now);
                self.trailing = None;
                true
            }
        }
    }

    /// Returns true when a deferred trailing run is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.trailing {
            Some(due) if now >= due => {
                self.last_run = Some(now);
                self.trailing = None;
                true
            }
            _ => false,
        }
    }

    pub fn has_trailing(&self) -> bool {
        self.trailing.is_some()
    }

    pub fn cancel(&mut self) {
        self.trailing = None;
    }

    pub fn reset(&mut self) {
        self.last_run = None;
        self.trailing = None;
    }
}
