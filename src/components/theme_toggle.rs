//! Dark / light / gt theme toggle.
//!
//! The page styles `<html class="light|gt">` for the palette and
//! `<html data-theme="...">` for the toggle icon. The preference is stored
//! raw under `localStorage["theme"]`.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FolioError, FolioResult, PreferenceStore, ThemeController, ThemeSurface};
use gloo::events::EventListener;
use tracing::{debug, warn};
use web_sys::{Element, Storage};

use crate::context::{js_err, js_message, Page};

/// `localStorage`, when the browser grants it.
pub struct LocalPreferences {
    storage: Option<Storage>,
}

impl LocalPreferences {
    pub fn new(page: &Page) -> Self {
        let storage = page.window.local_storage().ok().flatten();
        if storage.is_none() {
            debug!("localStorage unavailable, theme will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalPreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> FolioResult<()> {
        match &self.storage {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|e| FolioError::Storage(js_message(&e))),
            None => Ok(()),
        }
    }
}

/// `<html>` plus the optional toggle button.
pub struct DocumentTheme {
    root: Element,
    toggle: Option<Element>,
}

impl ThemeSurface for DocumentTheme {
    fn remove_root_class(&mut self, class: &str) {
        if let Err(e) = self.root.class_list().remove_1(class) {
            warn!(class, error = %js_err(e), "Failed to remove root class");
        }
    }

    fn add_root_class(&mut self, class: &str) {
        if let Err(e) = self.root.class_list().add_1(class) {
            warn!(class, error = %js_err(e), "Failed to add root class");
        }
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        if let Err(e) = self.root.set_attribute(name, value) {
            warn!(name, error = %js_err(e), "Failed to set root attribute");
        }
    }

    fn set_toggle_label(&mut self, label: &str) {
        if let Some(toggle) = &self.toggle {
            let _ = toggle.set_attribute("aria-label", label);
        }
    }
}

/// Apply the stored theme and cycle on every toggle click.
///
/// The theme is applied even when the page has no toggle.
pub fn install(page: &Page) -> FolioResult<()> {
    let toggle = page.by_id("themeToggle");
    let surface = DocumentTheme {
        root: page.root.clone(),
        toggle: toggle.clone(),
    };
    let themes = Rc::new(RefCell::new(ThemeController::initialize(
        LocalPreferences::new(page),
        surface,
    )));

    let Some(toggle) = toggle else {
        debug!("No #themeToggle, theme is fixed");
        return Ok(());
    };

    EventListener::new(&toggle, "click", move |_| {
        themes.borrow_mut().cycle();
    })
    .forget();

    Ok(())
}
