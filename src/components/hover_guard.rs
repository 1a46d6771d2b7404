//! Suppress hover-only effects while scrolling.
//!
//! Adds `is-scrolling` to `<html>` on the first scroll event and removes it
//! once no scroll has happened for `hover_idle_ms`. A timer that fires
//! before the deadline of the latest scroll re-arms for the rest.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use folio_core::scroll::{HoverGuard, SCROLLING_CLASS};
use folio_core::FolioResult;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::Element;

use crate::context::{millis, Page, PerformanceClock};

struct Guard {
    root: Element,
    clock: PerformanceClock,
    state: RefCell<HoverGuard>,
    idle: RefCell<Option<Timeout>>,
}

impl Guard {
    fn on_scroll(self: &Rc<Self>) {
        if self.state.borrow_mut().on_scroll(&self.clock) {
            let _ = self.root.class_list().add_1(SCROLLING_CLASS);
        }
        let idle = self.state.borrow().idle();
        self.arm(idle);
    }

    fn on_idle(self: &Rc<Self>) {
        let mut state = self.state.borrow_mut();
        if state.on_idle(&self.clock) {
            let _ = self.root.class_list().remove_1(SCROLLING_CLASS);
        } else if state.is_active() {
            let remaining = state.remaining(&self.clock);
            drop(state);
            self.arm(remaining);
        }
    }

    fn arm(self: &Rc<Self>, delay: Duration) {
        let guard = Rc::clone(self);
        let timeout = Timeout::new(millis(delay), move || guard.on_idle());
        // Replacing drops, and so cancels, the pending timer.
        *self.idle.borrow_mut() = Some(timeout);
    }
}

pub fn install(page: &Page) -> FolioResult<()> {
    let guard = Rc::new(Guard {
        root: page.root.clone(),
        clock: PerformanceClock::new(&page.window)?,
        state: RefCell::new(HoverGuard::new(page.config.hover_idle())),
        idle: RefCell::new(None),
    });

    EventListener::new(&page.window, "scroll", move |_| guard.on_scroll()).forget();

    Ok(())
}
