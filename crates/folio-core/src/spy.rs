//! Scroll-spy: which navigation link matches the centered section.

/// Class carried by the active navigation link.
pub const ACTIVE_CLASS: &str = "active";

/// Root margin that narrows the observed band to the middle of the viewport.
pub const SPY_ROOT_MARGIN: &str = "-45% 0px -50% 0px";

/// Fragment (and link `href`) for a section id.
pub fn fragment(section_id: &str) -> String {
    format!("#{section_id}")
}

/// Selector of the navigation link pointing at a section.
pub fn link_selector(section_id: &str) -> String {
    format!(".nav-link[href=\"#{}\"]", section_id.replace('"', "\\\""))
}

/// Tracks the active section.
#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    active: Option<String>,
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Record an intersection change for a section that has a matching link.
    /// Returns the section to activate when the active one changes.
    pub fn on_intersection(&mut self, section_id: &str, intersecting: bool) -> Option<String> {
        if !intersecting || section_id.is_empty() || self.active() == Some(section_id) {
            return None;
        }
        self.active = Some(section_id.to_string());
        self.active.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_and_fragment() {
        assert_eq!(fragment("about"), "#about");
        assert_eq!(link_selector("about"), ".nav-link[href=\"#about\"]");
    }

    #[test]
    fn test_activates_on_change_only() {
        let mut spy = ScrollSpy::new();
        assert_eq!(spy.on_intersection("about", true), Some("about".to_string()));
        assert_eq!(spy.on_intersection("about", true), None);
        assert_eq!(spy.on_intersection("projects", false), None);
        assert_eq!(spy.on_intersection("projects", true), Some("projects".to_string()));
        assert_eq!(spy.active(), Some("projects"));
    }

    #[test]
    fn test_unnamed_sections_ignored() {
        let mut spy = ScrollSpy::new();
        assert_eq!(spy.on_intersection("", true), None);
        assert_eq!(spy.active(), None);
    }
}
