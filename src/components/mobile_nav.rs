//! Mobile navigation menu.
//!
//! `.nav-toggle` expands `.nav-links`; following any `.nav-link` collapses
//! it again.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::nav::{MobileNav, OPEN_CLASS};
use folio_core::FolioResult;
use gloo::events::EventListener;
use tracing::debug;
use web_sys::Element;

use crate::context::{js_err, Page};

struct Menu {
    state: RefCell<MobileNav>,
    toggle: Element,
    links: Element,
}

impl Menu {
    fn sync(&self) -> FolioResult<()> {
        let state = self.state.borrow();
        self.links
            .class_list()
            .toggle_with_force(OPEN_CLASS, state.is_open())
            .map_err(js_err)?;
        self.toggle
            .set_attribute("aria-expanded", state.aria_expanded())
            .map_err(js_err)
    }
}

pub fn install(page: &Page) -> FolioResult<()> {
    let (Some(toggle), Some(links)) = (page.query(".nav-toggle"), page.query(".nav-links")) else {
        debug!("No mobile nav on this page");
        return Ok(());
    };

    let menu = Rc::new(Menu {
        state: RefCell::new(MobileNav::default()),
        toggle: toggle.clone(),
        links,
    });
    menu.sync()?;

    let on_toggle = Rc::clone(&menu);
    EventListener::new(&toggle, "click", move |_| {
        let open = on_toggle.state.borrow_mut().toggle();
        debug!(open, "Mobile nav toggled");
        let _ = on_toggle.sync();
    })
    .forget();

    for link in page.query_all(".nav-link") {
        let on_link = Rc::clone(&menu);
        EventListener::new(&link, "click", move |_| {
            on_link.state.borrow_mut().close();
            let _ = on_link.sync();
        })
        .forget();
    }

    Ok(())
}
