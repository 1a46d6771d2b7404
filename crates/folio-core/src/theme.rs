//! Theme state: dark, light and gt.
//!
//! The active theme is owned by a [`ThemeController`] rather than read back
//! from the document on every toggle. The controller writes through to a
//! [`ThemeSurface`] (the document root and the toggle button) and a
//! [`PreferenceStore`] (the persisted preference).

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::FolioResult;

/// Storage key of the persisted theme preference.
pub const THEME_KEY: &str = "theme";

/// Root attribute carrying the theme name (used for icon selection in CSS).
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// A named visual variant of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Gt,
}

impl Theme {
    /// Cycle order.
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Gt];

    /// Name as persisted and written to `data-theme`.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Gt => "gt",
        }
    }

    /// Class applied to the document root. `Dark` is the unclassed default.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Theme::Dark => None,
            Theme::Light => Some("light"),
            Theme::Gt => Some("gt"),
        }
    }

    /// Icon shown by the toggle while this theme is active.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "moon",
            Theme::Light => "sun",
            Theme::Gt => "bee",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Theme::Dark => 0,
            Theme::Light => 1,
            Theme::Gt => 2,
        }
    }

    /// Next theme in cycle order, wrapping from `Gt` to `Dark`.
    pub fn next(self) -> Theme {
        Theme::ALL[(self.index() + 1) % Theme::ALL.len()]
    }

    /// Parse an exact theme name.
    pub fn parse(name: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Normalize a persisted value: anything absent or unknown is `Dark`.
    pub fn from_stored(value: Option<&str>) -> Theme {
        value.and_then(Theme::parse).unwrap_or_default()
    }

    /// Accessible label of the toggle, announcing the theme a click switches to.
    pub fn toggle_label(self) -> String {
        format!("Switch theme (next: {})", self.next())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key/value preference persistence.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    fn save(&mut self, key: &str, value: &str) -> FolioResult<()>;
}

/// In-memory [`PreferenceStore`], used natively and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create a store pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> FolioResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The parts of the document a theme change is reflected into.
pub trait ThemeSurface {
    fn remove_root_class(&mut self, class: &str);

    fn add_root_class(&mut self, class: &str);

    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Set the toggle's `aria-label`. A page without a toggle ignores this.
    fn set_toggle_label(&mut self, label: &str);
}

/// Owner of the active theme.
pub struct ThemeController<S, T> {
    store: S,
    surface: T,
    current: Theme,
}

impl<S: PreferenceStore, T: ThemeSurface> ThemeController<S, T> {
    /// Read the persisted theme (defaulting to dark) and apply it.
    pub fn initialize(store: S, surface: T) -> Self {
        let stored = store.load(THEME_KEY);
        let theme = Theme::from_stored(stored.as_deref());
        if let Some(raw) = stored.as_deref().filter(|raw| Theme::parse(raw).is_none()) {
            debug!(raw, "Ignoring unknown stored theme");
        }

        let mut controller = Self {
            store,
            surface,
            current: theme,
        };
        controller.apply(theme);
        info!(%theme, "Theme initialized");
        controller
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Reflect `theme` into the document and persist it. Idempotent.
    pub fn apply(&mut self, theme: Theme) {
        for class in Theme::ALL.into_iter().filter_map(Theme::class) {
            self.surface.remove_root_class(class);
        }
        if let Some(class) = theme.class() {
            self.surface.add_root_class(class);
        }
        self.surface.set_root_attribute(THEME_ATTRIBUTE, theme.name());
        self.surface.set_toggle_label(&theme.toggle_label());

        if let Err(e) = self.store.save(THEME_KEY, theme.name()) {
            warn!(%theme, error = %e, "Failed to persist theme");
        }

        self.current = theme;
        debug!(%theme, "Applied theme");
    }

    /// Advance to the next theme in cycle order and apply it.
    pub fn cycle(&mut self) -> Theme {
        let next = self.current.next();
        self.apply(next);
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }
}
