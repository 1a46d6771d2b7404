//! Page features.
//!
//! Each module exposes an `install` function that finds its elements, wires
//! its listeners and returns. A feature whose elements are absent installs
//! as a no-op.

pub mod contact_glow;
pub mod footer;
pub mod hover_guard;
pub mod mobile_nav;
pub mod observers;
pub mod project_modal;
pub mod scroll_progress;
pub mod scroll_spy;
pub mod theme_toggle;
pub mod typing;
