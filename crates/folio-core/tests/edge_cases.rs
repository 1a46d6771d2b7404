//! Edge case and boundary condition tests
//!
//! Missing or malformed page data must always degrade to something
//! reasonable, never to an error.

mod common;

use common::{trigger, FakeDialog, FakeRoot};
use folio_core::palette::{self, DEFAULT_ACCENT};
use folio_core::scroll::scroll_progress;
use folio_core::theme::THEME_ATTRIBUTE;
use folio_core::{
    MemoryStore, ModalController, PageConfig, PreferenceStore, Theme, ThemeController, THEME_KEY,
};

// ============================================================================
// Theme Preference
// ============================================================================

#[test]
fn test_missing_preference_initializes_dark() {
    let themes = ThemeController::initialize(MemoryStore::default(), FakeRoot::default());

    assert_eq!(themes.current(), Theme::Dark);
    assert!(themes.surface().classes.is_empty());
    assert_eq!(
        themes.surface().attributes.get(THEME_ATTRIBUTE).map(String::as_str),
        Some("dark")
    );
    assert_eq!(themes.store().get(THEME_KEY), Some("dark"));
}

#[test]
fn test_garbage_preference_initializes_dark() {
    for stored in ["", "Dark", "blue", "gt ", "null", "{\"theme\":\"gt\"}"] {
        let store = MemoryStore::with_entry(THEME_KEY, stored);
        let themes = ThemeController::initialize(store, FakeRoot::default());
        assert_eq!(themes.current(), Theme::Dark, "stored value {:?}", stored);
        // The normalized value is written back.
        assert_eq!(themes.store().load(THEME_KEY).as_deref(), Some("dark"));
    }
}

#[test]
fn test_cycle_ignores_foreign_root_classes() {
    let mut root = FakeRoot::default();
    root.classes.insert("is-scrolling".to_string());

    let mut themes = ThemeController::initialize(MemoryStore::default(), root);
    themes.cycle();
    themes.cycle();

    let classes: Vec<_> = themes.surface().classes.iter().cloned().collect();
    assert_eq!(classes, vec!["gt".to_string(), "is-scrolling".to_string()]);
}

// ============================================================================
// Project Data
// ============================================================================

#[test]
fn test_demo_project_without_links_or_features() {
    let mut modal = ModalController::new(FakeDialog::with_tabbables(2));
    modal.open(100, &trigger(&[("title", "Demo"), ("tech", "Python,React")]));

    assert!(modal.is_open());
    let rendered = &modal.view().rendered;
    assert_eq!(rendered.title, "Demo");
    assert_eq!(rendered.chips.len(), 2);
    assert_eq!(rendered.chips[0].name, "Python");
    assert_eq!(rendered.chips[0].color, palette::PYTHON);
    assert_eq!(rendered.chips[1].name, "React");
    assert_eq!(rendered.chips[1].color, palette::REACT);
    assert!(rendered.link_buttons.is_empty());
    assert!(rendered.features.is_empty());
}

#[test]
fn test_malformed_json_still_opens() {
    let mut modal = ModalController::new(FakeDialog::with_tabbables(1));
    modal.open(
        100,
        &trigger(&[
            ("title", "Broken"),
            ("features", "[oops"),
            ("links", "{\"Live\": "),
            ("tech", "Haskell"),
        ]),
    );

    assert!(modal.is_open());
    let rendered = &modal.view().rendered;
    assert!(rendered.features.is_empty());
    assert!(rendered.link_buttons.is_empty());
    assert_eq!(rendered.chips[0].color, DEFAULT_ACCENT);
}

#[test]
fn test_gallery_capped_at_three_in_order() {
    let mut modal = ModalController::new(FakeDialog::with_tabbables(1));
    modal.open(100, &trigger(&[("images", "1.png, 2.png,3.png,4.png,5.png")]));

    assert_eq!(modal.view().rendered.images, vec!["1.png", "2.png", "3.png"]);
}

#[test]
fn test_empty_trigger_opens_blank_dialog() {
    let mut modal = ModalController::new(FakeDialog::with_tabbables(1));
    modal.open(100, &trigger(&[]));

    assert!(modal.is_open());
    assert_eq!(modal.view().rendered, common::Rendered::default());
}

#[test]
fn test_tech_list_with_blank_entries() {
    let mut modal = ModalController::new(FakeDialog::with_tabbables(1));
    modal.open(100, &trigger(&[("tech", " , Rust,,  ")]));

    let names: Vec<_> = modal.view().rendered.chips.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Rust"]);
}

// ============================================================================
// Scroll Progress
// ============================================================================

#[test]
fn test_progress_without_overflow() {
    assert_eq!(scroll_progress(0.0, 900.0, 900.0), 0.0);
    assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_unknown_config_keys_are_tolerated() {
    let config = PageConfig::from_json(r#"{"future_option": true, "hover_idle_ms": 90}"#).unwrap();
    assert_eq!(config.hover_idle_ms, 90);
}
