//! Hero typing loop.
//!
//! Text comes from `data-text` (or the element's own text). Under
//! `prefers-reduced-motion: reduce` the full text is shown and nothing
//! animates.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::typing::typing_enabled;
use folio_core::{FolioResult, Typewriter, TypingDriver};
use gloo::timers::callback::Timeout;
use tracing::debug;
use web_sys::Element;

use crate::context::{millis, Page, PerformanceClock};

struct TypingLoop {
    element: Element,
    clock: PerformanceClock,
    driver: RefCell<TypingDriver>,
    fonts: Vec<String>,
    timer: RefCell<Option<Timeout>>,
}

impl TypingLoop {
    fn tick(self: &Rc<Self>) {
        let wait = self.driver.borrow_mut().poll(&self.clock);
        self.render();

        let next = Rc::clone(self);
        let timeout = Timeout::new(millis(wait), move || next.tick());
        // At most one pending step. Replacing drops the timer that just fired.
        *self.timer.borrow_mut() = Some(timeout);
    }

    fn render(&self) {
        let driver = self.driver.borrow();
        let writer = driver.writer();
        self.element.set_text_content(Some(&writer.text()));

        let classes = self.element.class_list();
        for font in &self.fonts {
            if Some(font.as_str()) != writer.font() {
                let _ = classes.remove_1(font);
            }
        }
        if let Some(font) = writer.font() {
            let _ = classes.add_1(font);
        }
    }
}

pub fn install(page: &Page) -> FolioResult<()> {
    let Some(element) = page.query(".typing") else {
        debug!("No .typing element");
        return Ok(());
    };

    let text = element
        .get_attribute("data-text")
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| element.text_content().unwrap_or_default().trim().to_string());

    if !typing_enabled(page.prefers_reduced_motion(), &text) {
        debug!("Typing disabled, showing static text");
        element.set_text_content(Some(&text));
        return Ok(());
    }

    let clock = PerformanceClock::new(&page.window)?;
    let fonts = page.config.typing_fonts.clone();
    let writer = Typewriter::new(&text, fonts.clone(), page.config.typing_timings());
    let driver = TypingDriver::start(writer, &clock);

    element.set_text_content(Some(""));
    let typing = Rc::new(TypingLoop {
        element,
        clock,
        driver: RefCell::new(driver),
        fonts,
        timer: RefCell::new(None),
    });
    typing.tick();

    Ok(())
}
