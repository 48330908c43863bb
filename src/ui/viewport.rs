//! Scroll-into-view animation state.
//!
//! Sections fade in once when at least 10% of their area enters the
//! viewport, with a negative bottom margin so the trigger fires slightly
//! before full entry. After the first trigger the observation is torn down;
//! scrolling back out never reverses the flag.

use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct ObserverConfig {
    /// Fraction of the element that must be visible to trigger.
    pub threshold: f64,
    /// Bottom root margin in CSS pixels, negative to fire early.
    pub root_margin_bottom: i32,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_bottom: -100,
        }
    }
}

#[derive(Debug)]
pub struct VisibilityTracker {
    config: ObserverConfig,
    visible: bool,
    observing: bool,
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(ObserverConfig::default())
    }
}

impl VisibilityTracker {
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            visible: false,
            observing: true,
        }
    }

    pub fn config(&self) -> ObserverConfig {
        self.config
    }

    /// Feeds one intersection sample. Returns true on the transition to
    /// visible, which happens at most once per tracker.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if !self.observing {
            return false;
        }
        if intersection_ratio >= self.config.threshold {
            self.visible = true;
            self.observing = false;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the observer callback is still registered.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Unmount teardown; guarantees no callbacks leak after navigation.
    pub fn unmount(&mut self) {
        self.observing = false;
    }
}

/// Staggered child reveal for list sections: each item fades in after a
/// fixed per-item delay increment once the parent section is visible.
#[derive(Debug)]
pub struct StaggeredReveal {
    base_delay: Duration,
    increment: Duration,
    revealed: Vec<bool>,
}

impl StaggeredReveal {
    pub fn new(item_count: usize) -> Self {
        Self::with_timing(
            item_count,
            Duration::from_millis(100),
            Duration::from_millis(100),
        )
    }

    pub fn with_timing(item_count: usize, base_delay: Duration, increment: Duration) -> Self {
        Self {
            base_delay,
            increment,
            revealed: vec![false; item_count],
        }
    }

    pub fn delay_for(&self, index: usize) -> Duration {
        self.base_delay + self.increment * index as u32
    }

    pub fn reveal(&mut self, index: usize) {
        if let Some(slot) = self.revealed.get_mut(index) {
            *slot = true;
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}
