//! Decorative typing/deleting loop for the hero heading.
//!
//! [`Typewriter`] is the state machine; each [`step`](Typewriter::step)
//! performs one transition and returns the delay until the next one, so a
//! single re-armed timer drives the whole loop. [`TypingDriver`] runs it
//! against a [`Clock`], which lets tests advance time by hand.

use std::cell::Cell;
use std::time::Duration;

/// Delays between steps never drop below this, so a zero-configured timing
/// cannot spin the driver.
const MIN_STEP: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    HoldAfterType,
    Deleting,
    HoldAfterDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    pub type_step: Duration,
    pub delete_step: Duration,
    pub hold_after_type: Duration,
    pub hold_after_delete: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_step: Duration::from_millis(70),
            delete_step: Duration::from_millis(40),
            hold_after_type: Duration::from_millis(1800),
            hold_after_delete: Duration::from_millis(400),
        }
    }
}

/// The loop only runs when the user has not asked for reduced motion and
/// there is something to type.
pub fn typing_enabled(reduced_motion: bool, text: &str) -> bool {
    !reduced_motion && !text.trim().is_empty()
}

/// Types a fixed string, holds, deletes it, holds, and starts over in the
/// next font.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    phase: TypingPhase,
    fonts: Vec<String>,
    font: usize,
    timings: TypingTimings,
}

impl Typewriter {
    /// Start in `Typing` with nothing shown.
    pub fn new(text: &str, fonts: Vec<String>, timings: TypingTimings) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            phase: TypingPhase::Typing,
            fonts,
            font: 0,
            timings,
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// Number of characters currently visible.
    pub fn visible(&self) -> usize {
        self.shown
    }

    /// The visible prefix of the source text.
    pub fn text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn full_text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Font class of the current round.
    pub fn font(&self) -> Option<&str> {
        self.fonts.get(self.font).map(String::as_str)
    }

    /// Perform one transition; returns the delay before the next.
    pub fn step(&mut self) -> Duration {
        let len = self.chars.len();
        let delay = match self.phase {
            TypingPhase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = TypingPhase::HoldAfterType;
                    self.timings.hold_after_type
                } else {
                    self.timings.type_step
                }
            }
            TypingPhase::HoldAfterType => {
                self.phase = TypingPhase::Deleting;
                self.timings.delete_step
            }
            TypingPhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = TypingPhase::HoldAfterDelete;
                    self.timings.hold_after_delete
                } else {
                    self.timings.delete_step
                }
            }
            TypingPhase::HoldAfterDelete => {
                if !self.fonts.is_empty() {
                    self.font = (self.font + 1) % self.fonts.len();
                }
                self.phase = TypingPhase::Typing;
                self.timings.type_step
            }
        };
        delay.max(MIN_STEP)
    }
}

/// Monotonic time source, measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Runs a [`Typewriter`] against a clock, catching up on every step that
/// fell due since the last poll.
#[derive(Debug, Clone)]
pub struct TypingDriver {
    writer: Typewriter,
    due: Duration,
}

impl TypingDriver {
    /// The first step is due immediately.
    pub fn start(writer: Typewriter, clock: &impl Clock) -> Self {
        Self {
            writer,
            due: clock.now(),
        }
    }

    pub fn writer(&self) -> &Typewriter {
        &self.writer
    }

    /// Run every due step; returns how long until the next one.
    pub fn poll(&mut self, clock: &impl Clock) -> Duration {
        let now = clock.now();
        while self.due <= now {
            self.due += self.writer.step();
        }
        self.due - now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> TypingTimings {
        TypingTimings {
            type_step: Duration::from_millis(10),
            delete_step: Duration::from_millis(5),
            hold_after_type: Duration::from_millis(100),
            hold_after_delete: Duration::from_millis(50),
        }
    }

    #[test]
    fn test_types_then_holds() {
        let mut w = Typewriter::new("abc", vec![], fast());
        assert_eq!(w.step(), Duration::from_millis(10));
        assert_eq!(w.text(), "a");
        w.step();
        assert_eq!(w.step(), Duration::from_millis(100));
        assert_eq!(w.text(), "abc");
        assert_eq!(w.phase(), TypingPhase::HoldAfterType);
    }

    #[test]
    fn test_full_round_switches_font() {
        let fonts = vec!["mono".to_string(), "serif".to_string()];
        let mut w = Typewriter::new("ab", fonts, fast());
        assert_eq!(w.font(), Some("mono"));

        let mut phases = Vec::new();
        for _ in 0..6 {
            w.step();
            phases.push(w.phase());
        }
        assert_eq!(
            phases,
            vec![
                TypingPhase::Typing,
                TypingPhase::HoldAfterType,
                TypingPhase::Deleting,
                TypingPhase::Deleting,
                TypingPhase::HoldAfterDelete,
                TypingPhase::Typing,
            ]
        );
        assert_eq!(w.text(), "");
        assert_eq!(w.font(), Some("serif"));
    }

    #[test]
    fn test_driver_catches_up() {
        let clock = ManualClock::new();
        let mut driver = TypingDriver::start(Typewriter::new("hello", vec![], fast()), &clock);

        assert_eq!(driver.poll(&clock), Duration::from_millis(10));
        assert_eq!(driver.writer().text(), "h");

        clock.advance(Duration::from_millis(35));
        let wait = driver.poll(&clock);
        assert_eq!(driver.writer().text(), "hell");
        assert_eq!(wait, Duration::from_millis(5));
    }

    #[test]
    fn test_zero_timings_do_not_spin() {
        let zero = TypingTimings {
            type_step: Duration::ZERO,
            delete_step: Duration::ZERO,
            hold_after_type: Duration::ZERO,
            hold_after_delete: Duration::ZERO,
        };
        let clock = ManualClock::new();
        let mut driver = TypingDriver::start(Typewriter::new("x", vec![], zero), &clock);
        assert_eq!(driver.poll(&clock), MIN_STEP);
    }

    #[test]
    fn test_reduced_motion_disables() {
        assert!(typing_enabled(false, "Hi"));
        assert!(!typing_enabled(true, "Hi"));
        assert!(!typing_enabled(false, "   "));
    }
}
