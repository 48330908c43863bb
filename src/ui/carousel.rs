//! Testimonial carousel state: auto-advance on a fixed interval, wrapping
//! prev/next, paused by any user interaction with the controls.

use std::time::{Duration, Instant};

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(8);

#[derive(Debug)]
pub struct Carousel {
    len: usize,
    active: usize,
    interval: Duration,
    paused: bool,
    last_advance: Option<Instant>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self::with_interval(len, AUTO_ADVANCE_INTERVAL)
    }

    pub fn with_interval(len: usize, interval: Duration) -> Self {
        Self {
            len,
            active: 0,
            interval,
            paused: false,
            last_advance: None,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// User interaction: advance with wraparound and pause auto-advance.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.paused = true;
        self.active = (self.active + 1) % self.len;
    }

    /// User interaction: go back with wraparound and pause auto-advance.
    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.paused = true;
        self.active = (self.active + self.len - 1) % self.len;
    }

    /// Indicator dot: jump straight to an item. Out-of-range indices are
    /// ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.paused = true;
        self.active = index;
    }

    /// Explicitly re-enables auto-advance; nothing else resumes it.
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.last_advance = Some(now);
    }

    /// Drives the auto-advance timer. Returns true when the active item
    /// changed. Single-item and empty carousels never auto-advance.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.len <= 1 || self.paused {
            return false;
        }
        match self.last_advance {
            None => {
                self.last_advance = Some(now);
                false
            }
            Some(last) if now.duration_since(last) >= self.interval => {
                self.active = (self.active + 1) % self.len;
                self.last_advance = Some(now);
                true
            }
            Some(_) => false,
        }
    }
}
