//! Property-based tests for page state
//!
//! Uses proptest to verify invariants of theme cycling, scroll progress,
//! focus wrapping and the typing loop.

mod common;

use std::time::Duration;

use common::FakeRoot;
use folio_core::scroll::scroll_progress;
use folio_core::{
    wrap_target, ManualClock, MemoryStore, TabDirection, Theme, ThemeController, Typewriter,
    TypingDriver, TypingTimings, THEME_KEY,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn theme_strategy() -> impl Strategy<Value = Theme> {
    prop_oneof![Just(Theme::Dark), Just(Theme::Light), Just(Theme::Gt)]
}

fn timings_strategy() -> impl Strategy<Value = TypingTimings> {
    (1..50u64, 1..50u64, 1..500u64, 1..500u64).prop_map(|(t, d, ht, hd)| TypingTimings {
        type_step: Duration::from_millis(t),
        delete_step: Duration::from_millis(d),
        hold_after_type: Duration::from_millis(ht),
        hold_after_delete: Duration::from_millis(hd),
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Cycling is closed over the three themes and three steps return home
    #[test]
    fn cycle_is_closed_with_period_three(start in theme_strategy()) {
        prop_assert!(Theme::ALL.contains(&start.next()));
        prop_assert_ne!(start.next(), start);
        prop_assert_eq!(start.next().next().next(), start);
        prop_assert_eq!(start.next().index(), (start.index() + 1) % 3);
    }

    /// Applying a theme twice leaves the same root and stored value
    #[test]
    fn apply_is_idempotent(theme in theme_strategy(), stored in "[a-z]{0,6}") {
        let store = MemoryStore::with_entry(THEME_KEY, stored);
        let mut themes = ThemeController::initialize(store, FakeRoot::default());

        themes.apply(theme);
        let once = (themes.surface().clone(), themes.store().get(THEME_KEY).map(str::to_string));
        themes.apply(theme);
        let twice = (themes.surface().clone(), themes.store().get(THEME_KEY).map(str::to_string));

        prop_assert_eq!(once, twice);
        prop_assert!(themes.surface().classes.len() <= 1);
    }

    /// Any sequence of toggles leaves at most one theme class on the root
    #[test]
    fn toggles_keep_single_theme_class(toggles in 0..20usize) {
        let mut themes = ThemeController::initialize(MemoryStore::default(), FakeRoot::default());
        for _ in 0..toggles {
            themes.cycle();
        }
        prop_assert_eq!(themes.current(), Theme::ALL[toggles % 3]);
        let theme_classes = themes
            .surface()
            .classes
            .iter()
            .filter(|c| *c == "light" || *c == "gt")
            .count();
        prop_assert!(theme_classes <= 1);
    }

    /// Progress is always within [0, 100]
    #[test]
    fn progress_is_clamped(
        top in -1.0e6..1.0e6f64,
        height in 0.0..1.0e6f64,
        viewport in 0.0..1.0e6f64,
    ) {
        let p = scroll_progress(top, height, viewport);
        prop_assert!((0.0..=100.0).contains(&p));
    }

    /// Wrapping always lands inside the list
    #[test]
    fn wrap_target_in_bounds(len in 1..50usize, focused in proptest::option::of(0..50usize), shift in any::<bool>()) {
        let focused = focused.filter(|i| *i < len);
        if let Some(target) = wrap_target(len, focused, TabDirection::from_shift(shift)) {
            prop_assert!(target < len);
        }
    }

    /// The typed text is always a prefix of the source text
    #[test]
    fn typed_text_is_prefix(text in "[a-zA-Z ]{1,30}", timings in timings_strategy(), ticks in proptest::collection::vec(1..400u64, 1..60)) {
        let clock = ManualClock::new();
        let mut driver = TypingDriver::start(Typewriter::new(&text, vec!["a".into(), "b".into()], timings), &clock);

        for tick in ticks {
            clock.advance(Duration::from_millis(tick));
            let wait = driver.poll(&clock);
            prop_assert!(wait > Duration::ZERO);
            prop_assert!(text.starts_with(&driver.writer().text()));
        }
    }
}
