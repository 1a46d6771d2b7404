//! Highlight the navigation link of the section centered in the viewport.

use std::cell::RefCell;

use folio_core::spy::{fragment, link_selector, ScrollSpy, ACTIVE_CLASS};
use folio_core::FolioResult;
use tracing::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use super::observers::intersection_observer;
use crate::context::Page;

fn activate(document: &Document, window: &Window, links: &[Element], section_id: &str) {
    for link in links {
        let _ = link.class_list().remove_1(ACTIVE_CLASS);
    }
    if let Ok(Some(link)) = document.query_selector(&link_selector(section_id)) {
        let _ = link.class_list().add_1(ACTIVE_CLASS);
    }
    // Update the fragment without jumping to it.
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&fragment(section_id)));
    }
}

pub fn install(page: &Page) -> FolioResult<()> {
    let sections = page.query_all("main section");
    if sections.is_empty() {
        debug!("No sections to spy on");
        return Ok(());
    }

    let links = page.query_all(".nav-link");
    let document = page.document.clone();
    let window = page.window.clone();
    let spy = RefCell::new(ScrollSpy::new());

    let observer = intersection_observer(&page.config.spy_options(), move |entries, _| {
        for entry in entries {
            let id = entry.target().id();
            let has_link = matches!(document.query_selector(&link_selector(&id)), Ok(Some(_)));
            if !has_link {
                continue;
            }
            if let Some(active) = spy.borrow_mut().on_intersection(&id, entry.is_intersecting()) {
                debug!(section = %active, "Scroll-spy section changed");
                activate(&document, &window, &links, &active);
            }
        }
    })?;

    for section in &sections {
        observer.observe(section);
    }
    Ok(())
}
