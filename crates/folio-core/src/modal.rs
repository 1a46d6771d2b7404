//! Project details dialog lifecycle.
//!
//! ```text
//!            open()                  begin_close()             finish_close(ticket)
//!  Closed ───────────▶ Open ─────────────────────▶ Closing ─────────────────────▶ Closed
//!     ▲                 ▲ │ open() (overwrite)        │
//!     │                 └─┘                           │ open() (fresh open, ticket goes stale)
//!     └───────────────────────────────────────────────┘
//! ```
//!
//! Closing is split in two because the dialog animates out: the `open` state
//! is dropped immediately and the dialog is hidden once the transition has
//! run. Every open bumps a generation counter, so a delayed
//! [`finish_close`](ModalController::finish_close) scheduled before a newer
//! open is ignored.
//!
//! The global key handler lives for the whole page; the controller gates it.
//! [`handle_key`](ModalController::handle_key) only acts between an open and
//! the next close request.

use tracing::{debug, info};

use crate::focus::{wrap_target, TabDirection};
use crate::project::{DataSource, ProjectDetails};

/// The dialog subtree as the controller sees it.
pub trait ModalView {
    /// Handle to a focusable element.
    type Node: Clone + PartialEq;

    /// Fill title, description, features, chips, links and gallery.
    fn populate(&mut self, details: &ProjectDetails);

    /// Unhide, flush layout, then add the `open` state so the transition runs.
    fn reveal(&mut self);

    fn remove_open_state(&mut self);

    fn hide(&mut self);

    fn set_scroll_locked(&mut self, locked: bool);

    /// Tabbable elements inside the panel, in document order.
    fn tabbables(&self) -> Vec<Self::Node>;

    fn close_control(&self) -> Option<Self::Node>;

    fn focused(&self) -> Option<Self::Node>;

    fn focus(&mut self, node: &Self::Node);

    fn blur(&mut self, node: &Self::Node);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Open,
    Closing,
}

/// Keys the open dialog reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    Tab { shift: bool },
    Other,
}

impl ModalKey {
    /// Classify a `KeyboardEvent.key` value.
    pub fn from_key(key: &str, shift: bool) -> Self {
        match key {
            "Escape" | "Esc" => ModalKey::Escape,
            "Tab" => ModalKey::Tab { shift },
            _ => ModalKey::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Escape,
    CloseControl,
    Backdrop,
}

/// Proof of a close request, redeemed once the close transition has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct CloseTicket {
    generation: u64,
}

/// What the page must do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Let the browser handle the key.
    Ignored,
    /// Focus was moved by the controller; suppress the default.
    Contained,
    /// A close started; schedule `finish_close` after the transition.
    Closing(CloseTicket),
}

/// Owner of the single details dialog.
pub struct ModalController<V: ModalView> {
    view: V,
    phase: ModalPhase,
    trigger: Option<V::Node>,
    tabbables: Vec<V::Node>,
    details: Option<ProjectDetails>,
    listening: bool,
    generation: u64,
}

impl<V: ModalView> ModalController<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            phase: ModalPhase::Closed,
            trigger: None,
            tabbables: Vec::new(),
            details: None,
            listening: false,
            generation: 0,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// Whether the global key handler is currently intercepting keys.
    pub fn key_listener_active(&self) -> bool {
        self.listening
    }

    /// Details of the loaded project, while one is loaded.
    pub fn details(&self) -> Option<&ProjectDetails> {
        self.details.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Load the project behind `trigger` and show it. Always a fresh open,
    /// whatever the current phase.
    pub fn open(&mut self, trigger: V::Node, source: &impl DataSource) {
        let details = ProjectDetails::from_source(source);
        self.generation += 1;

        self.view.populate(&details);
        self.view.reveal();
        self.view.set_scroll_locked(true);

        self.tabbables = self.view.tabbables();
        let first = self
            .tabbables
            .first()
            .cloned()
            .or_else(|| self.view.close_control());
        if let Some(node) = first {
            self.view.focus(&node);
        }

        info!(
            title = %details.title,
            features = details.features.len(),
            links = details.links.len(),
            "Opened project details"
        );

        self.trigger = Some(trigger);
        self.details = Some(details);
        self.listening = true;
        self.phase = ModalPhase::Open;
    }

    /// Route a key press from the global handler.
    pub fn handle_key(&mut self, key: ModalKey) -> KeyOutcome {
        if !self.listening {
            return KeyOutcome::Ignored;
        }
        match key {
            ModalKey::Escape => match self.begin_close(CloseReason::Escape) {
                Some(ticket) => KeyOutcome::Closing(ticket),
                None => KeyOutcome::Ignored,
            },
            ModalKey::Tab { shift } => self.contain_focus(TabDirection::from_shift(shift)),
            ModalKey::Other => KeyOutcome::Ignored,
        }
    }

    /// Pointer-down inside the dialog. Only a press on the backdrop itself
    /// (not bubbling up from the panel) closes.
    pub fn pointer_down(&mut self, on_backdrop: bool) -> Option<CloseTicket> {
        if on_backdrop {
            self.begin_close(CloseReason::Backdrop)
        } else {
            None
        }
    }

    /// Drop the `open` state and stop intercepting keys. The dialog stays
    /// visible until the returned ticket is redeemed.
    pub fn begin_close(&mut self, reason: CloseReason) -> Option<CloseTicket> {
        if self.phase != ModalPhase::Open {
            return None;
        }
        self.view.remove_open_state();
        self.listening = false;
        self.phase = ModalPhase::Closing;
        debug!(?reason, "Closing project details");
        Some(CloseTicket {
            generation: self.generation,
        })
    }

    /// Hide the dialog, restore scrolling and blur the trigger. Returns
    /// `false` when the ticket went stale because the dialog was reopened.
    ///
    /// Focus is not moved back onto the trigger: a restored focus ring on the
    /// card lingers after a pointer close.
    pub fn finish_close(&mut self, ticket: CloseTicket) -> bool {
        if self.phase != ModalPhase::Closing || ticket.generation != self.generation {
            debug!("Ignoring stale close");
            return false;
        }
        self.view.hide();
        self.view.set_scroll_locked(false);
        if let Some(trigger) = self.trigger.take() {
            self.view.blur(&trigger);
        }
        self.tabbables.clear();
        self.details = None;
        self.phase = ModalPhase::Closed;
        true
    }

    /// Close without waiting for a transition.
    pub fn close_now(&mut self, reason: CloseReason) -> bool {
        match self.begin_close(reason) {
            Some(ticket) => self.finish_close(ticket),
            None => false,
        }
    }

    fn contain_focus(&mut self, direction: TabDirection) -> KeyOutcome {
        // The panel's content can change while open, so re-query.
        self.tabbables = self.view.tabbables();

        if self.tabbables.is_empty() {
            if let Some(close) = self.view.close_control() {
                self.view.focus(&close);
            }
            return KeyOutcome::Contained;
        }

        let focused = self.view.focused();
        let position = focused
            .as_ref()
            .and_then(|node| self.tabbables.iter().position(|t| t == node));

        match wrap_target(self.tabbables.len(), position, direction) {
            Some(index) => {
                let target = self.tabbables[index].clone();
                self.view.focus(&target);
                KeyOutcome::Contained
            }
            None => KeyOutcome::Ignored,
        }
    }
}
