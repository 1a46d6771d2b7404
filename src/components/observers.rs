//! One-shot intersection effects: reveal, skill bars and chip stagger.
//!
//! All three go through [`observe_once`], which runs an effect the first
//! time each element intersects and then unobserves it.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::reveal::{
    chip_stagger, parse_percent, percent_width, CHIP_HIDDEN_OPACITY, CHIP_HIDDEN_TRANSFORM,
    CHIP_SHOWN_OPACITY, CHIP_SHOWN_TRANSFORM, VISIBLE_CLASS,
};
use folio_core::{FolioResult, ObserveOptions, OnceObserver};
use js_sys::Array;
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::context::{js_err, query_all_in, Page};

/// Build an `IntersectionObserver` from options and a callback.
pub fn intersection_observer(
    options: &ObserveOptions,
    mut callback: impl FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver) + 'static,
) -> FolioResult<IntersectionObserver> {
    let closure = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .collect();
            callback(entries, observer);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = &options.root_margin {
        init.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init).map_err(js_err)?;
    // The observer lives as long as the page.
    closure.forget();
    Ok(observer)
}

/// Run `effect` on each element the first time it becomes visible.
pub fn observe_once(
    elements: Vec<Element>,
    options: &ObserveOptions,
    effect: impl Fn(&Element) + 'static,
) -> FolioResult<()> {
    if elements.is_empty() {
        return Ok(());
    }

    let pending = Rc::new(RefCell::new(OnceObserver::new()));
    let tracked = Rc::clone(&pending);
    let observer = intersection_observer(options, move |entries, observer| {
        let fired = tracked.borrow_mut().dispatch(
            entries,
            |entry| entry.target(),
            |entry| entry.is_intersecting(),
            |entry| effect(&entry.target()),
        );
        for target in fired {
            observer.unobserve(&target);
        }
    })?;

    for element in elements {
        pending.borrow_mut().observe(element.clone());
        observer.observe(&element);
    }
    Ok(())
}

/// `.reveal` elements gain `visible` once seen.
pub fn install_reveal(page: &Page) -> FolioResult<()> {
    let targets = page.query_all(".reveal");
    debug!(count = targets.len(), "Observing reveal targets");
    observe_once(targets, &page.config.reveal_options(), |el| {
        let _ = el.class_list().add_1(VISIBLE_CLASS);
    })
}

/// `.bar` fills its inner `span` to `data-percent` once seen.
pub fn install_skill_bars(page: &Page) -> FolioResult<()> {
    let bars = page.query_all(".bar");
    debug!(count = bars.len(), "Observing skill bars");
    observe_once(bars, &page.config.skills_options(), |bar| {
        let percent = parse_percent(bar.get_attribute("data-percent").as_deref());
        let fill = bar
            .query_selector("span")
            .ok()
            .flatten()
            .and_then(|span| span.dyn_into::<HtmlElement>().ok());
        if let Some(fill) = fill {
            let _ = fill.style().set_property("width", &percent_width(percent));
        }
    })
}

/// Chips in `.chip-group` start hidden and fade in one after another the
/// first time the group is seen.
pub fn install_chips(page: &Page) -> FolioResult<()> {
    let Some(group) = page.query(".chip-group") else {
        debug!("No .chip-group");
        return Ok(());
    };

    let chips: Vec<HtmlElement> = query_all_in(&group, ".chip")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    for chip in &chips {
        let style = chip.style();
        style.set_property("opacity", CHIP_HIDDEN_OPACITY).map_err(js_err)?;
        style.set_property("transform", CHIP_HIDDEN_TRANSFORM).map_err(js_err)?;
    }

    let step = page.config.chip_stagger();
    let transition = page.config.chip_transition();
    observe_once(vec![group], &page.config.chips_options(), move |_| {
        for (i, chip) in chips.iter().enumerate() {
            let stagger = chip_stagger(i, step, transition);
            let style = chip.style();
            let _ = style.set_property("transition", &stagger.transition);
            let _ = style.set_property("transition-delay", &stagger.delay);
            let _ = style.set_property("opacity", CHIP_SHOWN_OPACITY);
            let _ = style.set_property("transform", CHIP_SHOWN_TRANSFORM);
        }
    })
}
