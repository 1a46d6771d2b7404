//! Project details dialog.
//!
//! Every `.project` card carries its details in `data-*` attributes. Clicking
//! a card (or Enter/Space while it has focus) fills `#project-modal` and
//! opens it. Lifecycle and focus containment live in
//! [`folio_core::ModalController`]; this module is its DOM binding.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use folio_core::focus::{effective_tabindex, FocusCandidate, TABBABLE_SELECTOR};
use folio_core::{
    CloseReason, CloseTicket, DataSource, FolioResult, KeyOutcome, ModalController, ModalKey,
    ModalView, ProjectDetails,
};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::context::{millis, query_all_in, Page};

const OPEN_CLASS: &str = "open";
const CUE_CLASS: &str = "hovering";

/// `data-*` attributes of a project card.
struct ElementData<'a>(&'a Element);

impl DataSource for ElementData<'_> {
    fn data(&self, key: &str) -> Option<String> {
        self.0.get_attribute(&format!("data-{key}"))
    }
}

/// The dialog's DOM.
pub struct DomModalView {
    document: Document,
    body: Option<HtmlElement>,
    root: Element,
    panel: Element,
    title: Option<Element>,
    description: Option<Element>,
    features: Option<Element>,
    tech: Option<Element>,
    links: Option<Element>,
    gallery: Option<Element>,
    close: Option<Element>,
}

impl DomModalView {
    fn new(page: &Page, root: Element) -> Self {
        let part = |selector: &str| root.query_selector(selector).ok().flatten();
        let panel = part(".modal-panel").unwrap_or_else(|| root.clone());
        Self {
            document: page.document.clone(),
            body: page.body(),
            title: part(".modal-title"),
            description: part(".modal-description"),
            features: part(".modal-features"),
            tech: part(".modal-tech"),
            links: part(".modal-links"),
            gallery: part(".modal-gallery"),
            close: part(".modal-close"),
            panel,
            root,
        }
    }

    /// Create `<tag>` and append it to `parent`.
    fn append(&self, parent: &Element, tag: &str) -> Option<Element> {
        let child = match self.document.create_element(tag) {
            Ok(child) => child,
            Err(e) => {
                warn!(tag, error = ?e, "Failed to create element");
                return None;
            }
        };
        parent.append_child(&child).ok()?;
        Some(child)
    }

    fn fill_features(&self, details: &ProjectDetails) {
        let Some(list) = &self.features else { return };
        list.set_inner_html("");
        for feature in &details.features {
            if let Some(item) = self.append(list, "li") {
                item.set_text_content(Some(feature));
            }
        }
    }

    fn fill_tech(&self, details: &ProjectDetails) {
        let Some(group) = &self.tech else { return };
        group.set_inner_html("");
        for chip in details.chips() {
            let Some(span) = self.append(group, "span") else { continue };
            span.set_class_name("chip");
            span.set_text_content(Some(&chip.name));
            if let Some(span) = span.dyn_ref::<HtmlElement>() {
                let _ = span.style().set_property("--chip-color", chip.color);
            }
        }
    }

    fn fill_links(&self, details: &ProjectDetails) {
        let Some(group) = &self.links else { return };
        group.set_inner_html("");
        for link in &details.links {
            let Some(anchor) = self.append(group, "a") else { continue };
            anchor.set_class_name("btn");
            anchor.set_text_content(Some(&link.label));
            let _ = anchor.set_attribute("href", &link.url);
            let _ = anchor.set_attribute("target", "_blank");
            let _ = anchor.set_attribute("rel", "noopener noreferrer");
        }
    }

    fn fill_gallery(&self, details: &ProjectDetails) {
        let Some(gallery) = &self.gallery else { return };
        gallery.set_inner_html("");
        for (i, src) in details.images.iter().enumerate() {
            let Some(img) = self.append(gallery, "img") else { continue };
            let _ = img.set_attribute("src", src);
            let _ = img.set_attribute("alt", &format!("{} screenshot {}", details.title, i + 1));
            let _ = img.set_attribute("loading", "lazy");
        }
    }

    fn candidate(element: &Element) -> FocusCandidate {
        FocusCandidate {
            disabled: element.has_attribute("disabled"),
            hidden: matches!(element.closest("[hidden]"), Ok(Some(_))),
            tabindex: match element.dyn_ref::<HtmlElement>() {
                Some(html) => html.tab_index(),
                None => effective_tabindex(
                    &element.local_name(),
                    element.get_attribute("tabindex").as_deref(),
                ),
            },
        }
    }
}

impl ModalView for DomModalView {
    type Node = Element;

    fn populate(&mut self, details: &ProjectDetails) {
        if let Some(title) = &self.title {
            title.set_text_content(Some(&details.title));
        }
        if let Some(description) = &self.description {
            description.set_text_content(Some(&details.description));
        }
        self.fill_features(details);
        self.fill_tech(details);
        self.fill_links(details);
        self.fill_gallery(details);
    }

    fn reveal(&mut self) {
        let _ = self.root.remove_attribute("hidden");
        let _ = self.root.set_attribute("aria-hidden", "false");
        // Flush layout so the `open` transition runs from the hidden state.
        if let Some(root) = self.root.dyn_ref::<HtmlElement>() {
            let _ = root.offset_width();
        }
        let _ = self.root.class_list().add_1(OPEN_CLASS);
    }

    fn remove_open_state(&mut self) {
        let _ = self.root.class_list().remove_1(OPEN_CLASS);
    }

    fn hide(&mut self) {
        let _ = self.root.set_attribute("hidden", "");
        let _ = self.root.set_attribute("aria-hidden", "true");
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = &self.body else { return };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            warn!(locked, error = ?e, "Failed to toggle scroll lock");
        }
    }

    fn tabbables(&self) -> Vec<Element> {
        query_all_in(&self.panel, TABBABLE_SELECTOR)
            .into_iter()
            .filter(|el| Self::candidate(el).is_tabbable())
            .collect()
    }

    fn close_control(&self) -> Option<Element> {
        self.close.clone()
    }

    fn focused(&self) -> Option<Element> {
        self.document.active_element()
    }

    fn focus(&mut self, node: &Element) {
        if let Some(node) = node.dyn_ref::<HtmlElement>() {
            let _ = node.focus();
        }
    }

    fn blur(&mut self, node: &Element) {
        if let Some(node) = node.dyn_ref::<HtmlElement>() {
            let _ = node.blur();
        }
    }
}

type SharedModal = Rc<RefCell<ModalController<DomModalView>>>;

/// Redeem `ticket` once the close transition has run.
fn finish_later(modal: &SharedModal, ticket: CloseTicket, delay: Duration) {
    let modal = Rc::clone(modal);
    Timeout::new(millis(delay), move || {
        modal.borrow_mut().finish_close(ticket);
    })
    .forget();
}

fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

pub fn install(page: &Page) -> FolioResult<()> {
    let Some(root) = page.by_id("project-modal") else {
        debug!("No #project-modal");
        return Ok(());
    };
    let cards = page.query_all(".project");
    debug!(count = cards.len(), "Wiring project cards");

    let close_delay = page.config.modal_close();
    let cue = page.config.project_cue();
    let modal: SharedModal = Rc::new(RefCell::new(ModalController::new(DomModalView::new(
        page,
        root.clone(),
    ))));
    let active = EventListenerOptions::enable_prevent_default();

    for card in cards {
        {
            let modal = Rc::clone(&modal);
            let target = card.clone();
            EventListener::new(&card, "click", move |event| {
                // Links inside a card keep their own behaviour.
                let on_link = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .is_some_and(|el| matches!(el.closest("a"), Ok(Some(_))));
                if !on_link {
                    modal.borrow_mut().open(target.clone(), &ElementData(&target));
                }
            })
            .forget();
        }

        let modal = Rc::clone(&modal);
        let target = card.clone();
        EventListener::new_with_options(&card, "keydown", active, move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else { return };
            if !is_activation_key(&event.key()) {
                return;
            }
            event.prevent_default();

            let _ = target.class_list().add_1(CUE_CLASS);
            let cued = target.clone();
            Timeout::new(millis(cue), move || {
                let _ = cued.class_list().remove_1(CUE_CLASS);
            })
            .forget();

            modal.borrow_mut().open(target.clone(), &ElementData(&target));
        })
        .forget();
    }

    {
        let modal = Rc::clone(&modal);
        EventListener::new_with_options(&page.document, "keydown", active, move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else { return };
            let key = ModalKey::from_key(&event.key(), event.shift_key());
            let outcome = modal.borrow_mut().handle_key(key);
            match outcome {
                KeyOutcome::Ignored => {}
                KeyOutcome::Contained => event.prevent_default(),
                KeyOutcome::Closing(ticket) => finish_later(&modal, ticket, close_delay),
            }
        })
        .forget();
    }

    let close = modal.borrow().view().close_control();
    if let Some(close) = close {
        let modal = Rc::clone(&modal);
        EventListener::new(&close, "click", move |_| {
            let ticket = modal.borrow_mut().begin_close(CloseReason::CloseControl);
            if let Some(ticket) = ticket {
                finish_later(&modal, ticket, close_delay);
            }
        })
        .forget();
    }

    let backdrop = root.clone();
    EventListener::new(&root, "pointerdown", move |event| {
        let on_backdrop = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|el| el == backdrop);
        let ticket = modal.borrow_mut().pointer_down(on_backdrop);
        if let Some(ticket) = ticket {
            finish_later(&modal, ticket, close_delay);
        }
    })
    .forget();

    Ok(())
}
