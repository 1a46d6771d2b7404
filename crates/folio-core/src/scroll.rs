//! Scroll-driven observers: the progress bar and the hover guard.

use std::time::Duration;

use crate::typing::Clock;

/// Root class present while the page is scrolling.
pub const SCROLLING_CLASS: &str = "is-scrolling";

/// Percentage of the document scrolled, clamped to `[0, 100]`.
///
/// A document no taller than the viewport has nothing to scroll and reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Suppresses hover-only effects while the user scrolls.
///
/// Every scroll pushes the idle deadline forward. The class goes away only
/// once the clock has passed the deadline of the latest scroll.
#[derive(Debug, Clone)]
pub struct HoverGuard {
    active: bool,
    idle: Duration,
    deadline: Duration,
}

impl HoverGuard {
    pub fn new(idle: Duration) -> Self {
        Self {
            active: false,
            idle,
            deadline: Duration::ZERO,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Quiet time required after the last scroll.
    pub fn idle(&self) -> Duration {
        self.idle
    }

    /// Time left until the class may be removed, zero once it is due.
    pub fn remaining(&self, clock: &impl Clock) -> Duration {
        self.deadline.saturating_sub(clock.now())
    }

    /// Record a scroll. Returns `true` when the class must be added now.
    pub fn on_scroll(&mut self, clock: &impl Clock) -> bool {
        self.deadline = clock.now() + self.idle;
        !std::mem::replace(&mut self.active, true)
    }

    /// An idle check ran. Returns `true` when the class must be removed;
    /// `false` while inactive or while a later scroll keeps it on.
    pub fn on_idle(&mut self, clock: &impl Clock) -> bool {
        if !self.active || clock.now() < self.deadline {
            return false;
        }
        self.active = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typing::ManualClock;

    #[test]
    fn test_no_overflow_is_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(120.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(scroll_progress(100.0, 1200.0, 800.0), 25.0);
        assert_eq!(scroll_progress(400.0, 1200.0, 800.0), 100.0);
    }

    #[test]
    fn test_overscroll_clamps() {
        assert_eq!(scroll_progress(-50.0, 1200.0, 800.0), 0.0);
        assert_eq!(scroll_progress(900.0, 1200.0, 800.0), 100.0);
        assert_eq!(scroll_progress(f64::NAN, 1200.0, 800.0), 0.0);
    }

    #[test]
    fn test_hover_guard_cycle() {
        let clock = ManualClock::new();
        let mut guard = HoverGuard::new(Duration::from_millis(150));
        assert!(guard.on_scroll(&clock));
        assert!(!guard.on_scroll(&clock));
        assert!(guard.is_active());

        clock.advance(Duration::from_millis(150));
        assert!(guard.on_idle(&clock));
        assert!(!guard.on_idle(&clock));
        assert!(guard.on_scroll(&clock));
    }

    #[test]
    fn test_scroll_within_idle_window_keeps_class() {
        let clock = ManualClock::new();
        let mut guard = HoverGuard::new(Duration::from_millis(150));
        guard.on_scroll(&clock);

        clock.advance(Duration::from_millis(100));
        guard.on_scroll(&clock);

        // The first scroll's window is over, the second one's is not.
        clock.advance(Duration::from_millis(60));
        assert!(!guard.on_idle(&clock));
        assert!(guard.is_active());
        assert_eq!(guard.remaining(&clock), Duration::from_millis(90));

        clock.advance(Duration::from_millis(90));
        assert!(guard.on_idle(&clock));
        assert!(!guard.is_active());
        assert_eq!(guard.remaining(&clock), Duration::ZERO);
    }
}
