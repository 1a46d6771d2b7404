//! Shared test doubles: an in-memory document root and details dialog.

#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};

use folio_core::{ModalView, ProjectDetails, TechChip, ThemeSurface};

/// Document root with a class list, attributes and a toggle label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeRoot {
    pub classes: BTreeSet<String>,
    pub attributes: HashMap<String, String>,
    pub toggle_label: Option<String>,
}

impl ThemeSurface for FakeRoot {
    fn remove_root_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn add_root_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.toggle_label = Some(label.to_string());
    }
}

/// What the dialog currently renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub chips: Vec<TechChip>,
    pub link_buttons: Vec<(String, String)>,
    pub images: Vec<String>,
}

/// Details dialog whose panel holds tabbable element ids `1..=tabbables`.
/// Id 1 is the close control.
#[derive(Debug, Clone)]
pub struct FakeDialog {
    pub rendered: Rendered,
    pub tabbable_count: u32,
    pub hidden: bool,
    pub open_state: bool,
    pub scroll_locked: bool,
    pub focused: Option<u32>,
    pub blurred: Vec<u32>,
}

impl FakeDialog {
    pub fn with_tabbables(count: u32) -> Self {
        Self {
            rendered: Rendered::default(),
            tabbable_count: count,
            hidden: true,
            open_state: false,
            scroll_locked: false,
            focused: None,
            blurred: Vec::new(),
        }
    }
}

impl ModalView for FakeDialog {
    type Node = u32;

    fn populate(&mut self, details: &ProjectDetails) {
        self.rendered = Rendered {
            title: details.title.clone(),
            description: details.description.clone(),
            features: details.features.clone(),
            chips: details.chips().collect(),
            link_buttons: details
                .links
                .iter()
                .map(|l| (l.label.clone(), l.url.clone()))
                .collect(),
            images: details.images.clone(),
        };
    }

    fn reveal(&mut self) {
        self.hidden = false;
        self.open_state = true;
    }

    fn remove_open_state(&mut self) {
        self.open_state = false;
    }

    fn hide(&mut self) {
        self.hidden = true;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn tabbables(&self) -> Vec<u32> {
        (1..=self.tabbable_count).collect()
    }

    fn close_control(&self) -> Option<u32> {
        Some(1)
    }

    fn focused(&self) -> Option<u32> {
        self.focused
    }

    fn focus(&mut self, node: &u32) {
        self.focused = Some(*node);
    }

    fn blur(&mut self, node: &u32) {
        self.blurred.push(*node);
        if self.focused == Some(*node) {
            self.focused = None;
        }
    }
}

/// Trigger attributes from `(key, value)` pairs.
pub fn trigger(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
