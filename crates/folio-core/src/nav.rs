//! Mobile navigation menu state.

/// Class carried by `.nav-links` while the menu is expanded.
pub const OPEN_CLASS: &str = "open";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A navigation link was followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the toggle's `aria-expanded`.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut nav = MobileNav::default();
        assert_eq!(nav.aria_expanded(), "false");
        assert!(nav.toggle());
        assert_eq!(nav.aria_expanded(), "true");
        nav.close();
        assert!(!nav.is_open());
        assert!(nav.toggle());
        assert!(!nav.toggle());
    }
}
