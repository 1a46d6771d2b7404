//! Page context shared by every component.
//!
//! Holds the browser handles and the resolved [`PageConfig`]. Components
//! take `&Page` at install time and clone whatever handles their event
//! closures need.

use std::time::Duration;

use folio_core::config::{timer_delay_ms, CONFIG_ELEMENT_ID};
use folio_core::typing::Clock;
use folio_core::{FolioError, FolioResult, PageConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Performance, Window};

/// Browser handles plus configuration.
pub struct Page {
    pub window: Window,
    pub document: Document,
    /// The `<html>` element.
    pub root: Element,
    pub config: PageConfig,
}

impl Page {
    pub fn new(config: PageConfig) -> FolioResult<Self> {
        let window = web_sys::window().ok_or_else(|| FolioError::MissingElement("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| FolioError::MissingElement("document".into()))?;
        let root = document
            .document_element()
            .ok_or_else(|| FolioError::MissingElement("<html>".into()))?;
        Ok(Self {
            window,
            document,
            root,
            config,
        })
    }

    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        self.document
            .query_selector_all(selector)
            .map(|list| elements(&list))
            .unwrap_or_default()
    }

    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    /// Whether the user asked the system for reduced motion.
    pub fn prefers_reduced_motion(&self) -> bool {
        self.window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
}

/// Read the embedded `#folio-config` block, if the page has one.
pub fn read_config() -> FolioResult<PageConfig> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    PageConfig::from_optional_json(raw.as_deref())
}

/// Elements matching `selector` below `parent`.
pub fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Map a rejected browser call into a [`FolioError`].
pub fn js_err(value: JsValue) -> FolioError {
    FolioError::Dom(js_message(&value))
}

/// Readable text of a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Duration as a `setTimeout` delay.
pub fn millis(duration: Duration) -> u32 {
    timer_delay_ms(duration)
}

/// [`Clock`] over `performance.now()`.
pub struct PerformanceClock {
    performance: Performance,
}

impl PerformanceClock {
    pub fn new(window: &Window) -> FolioResult<Self> {
        window
            .performance()
            .map(|performance| Self { performance })
            .ok_or_else(|| FolioError::MissingElement("performance".into()))
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> Duration {
        Duration::from_secs_f64(self.performance.now().max(0.0) / 1000.0)
    }
}
