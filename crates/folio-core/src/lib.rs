//! Folio Core Library
//!
//! State machines and observers behind the interactive layer of a static
//! portfolio page.
//!
//! ## Overview
//!
//! Nothing in this crate touches the DOM. Every piece of page state lives in
//! an owned Rust value, and the browser is reached through a handful of small
//! traits that the `folio` binary implements over `web-sys`:
//!
//! - [`PreferenceStore`] - key/value persistence (`localStorage`)
//! - [`ThemeSurface`] - root element classes, attributes and the toggle label
//! - [`DataSource`] - `data-*` attributes of a project trigger
//! - [`ModalView`] - the project details dialog subtree
//! - [`logging::LogSink`] - where rendered log entries go
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{MemoryStore, Theme, ThemeController};
//!
//! let mut themes = ThemeController::initialize(MemoryStore::default(), surface);
//! assert_eq!(themes.current(), Theme::Dark);
//! themes.cycle();
//! assert_eq!(themes.current(), Theme::Light);
//! ```

pub mod config;
pub mod error;
pub mod focus;
pub mod glow;
pub mod logging;
pub mod modal;
pub mod nav;
pub mod observe;
pub mod palette;
pub mod project;
pub mod reveal;
pub mod scroll;
pub mod spy;
pub mod theme;
pub mod typing;

// Re-exports
pub use config::PageConfig;
pub use error::{FolioError, FolioResult};
pub use focus::{effective_tabindex, wrap_target, FocusCandidate, TabDirection, TABBABLE_SELECTOR};
pub use modal::{CloseReason, CloseTicket, KeyOutcome, ModalController, ModalKey, ModalPhase, ModalView};
pub use observe::{ObserveOptions, OnceObserver};
pub use project::{DataSource, ProjectDetails, ProjectLink, TechChip, MAX_GALLERY_IMAGES};
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemeController, ThemeSurface, THEME_KEY};
pub use typing::{Clock, ManualClock, Typewriter, TypingDriver, TypingPhase, TypingTimings};
