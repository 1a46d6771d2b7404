//! Glow that follows the pointer across the contact card.

use folio_core::glow::{glow_position, Rect, GLOW_X_VAR, GLOW_Y_VAR};
use folio_core::FolioResult;
use gloo::events::EventListener;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::context::Page;

fn set_glow(card: &HtmlElement, x: f64, y: f64) {
    let style = card.style();
    let _ = style.set_property(GLOW_X_VAR, &format!("{x:.1}%"));
    let _ = style.set_property(GLOW_Y_VAR, &format!("{y:.1}%"));
}

pub fn install(page: &Page) -> FolioResult<()> {
    let Some(card) = page
        .query(".contact-card")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!("No .contact-card");
        return Ok(());
    };

    let target = card.clone();
    EventListener::new(&card, "pointermove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let bounds = target.get_bounding_client_rect();
        let rect = Rect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        };
        let (x, y) = glow_position(f64::from(event.client_x()), f64::from(event.client_y()), rect);
        set_glow(&target, x, y);
    })
    .forget();

    let target = card.clone();
    EventListener::new(&card, "pointerleave", move |_| set_glow(&target, 50.0, 50.0)).forget();

    Ok(())
}
