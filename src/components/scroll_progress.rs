//! Reading progress bar.

use folio_core::reveal::percent_width;
use folio_core::scroll::scroll_progress;
use folio_core::FolioResult;
use gloo::events::EventListener;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::context::{js_err, Page};

fn update(window: &Window, root: &Element, bar: &HtmlElement) -> FolioResult<()> {
    let scroll_top = window.scroll_y().unwrap_or_else(|_| f64::from(root.scroll_top()));
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_else(|| f64::from(root.client_height()));
    let progress = scroll_progress(scroll_top, f64::from(root.scroll_height()), viewport);
    bar.style()
        .set_property("width", &percent_width(progress))
        .map_err(js_err)
}

pub fn install(page: &Page) -> FolioResult<()> {
    let Some(bar) = page
        .by_id("scroll-progress")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!("No #scroll-progress bar");
        return Ok(());
    };

    let window = page.window.clone();
    let root = page.root.clone();
    update(&window, &root, &bar)?;

    // gloo listeners are passive by default.
    EventListener::new(&page.document, "scroll", move |_| {
        let _ = update(&window, &root, &bar);
    })
    .forget();

    Ok(())
}
