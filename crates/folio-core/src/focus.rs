//! Tabbable discovery and focus wrapping for the details dialog.

/// Elements that can take part in sequential keyboard navigation.
pub const TABBABLE_SELECTOR: &str =
    "a[href], button, input, select, textarea, [tabindex]";

/// Tags that take focus without a `tabindex` attribute. Anchors only do so
/// with an `href`, which the selector already requires.
const NATIVE_FOCUSABLE: [&str; 5] = ["a", "button", "input", "select", "textarea"];

/// The properties of a candidate element that decide whether Tab reaches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusCandidate {
    pub disabled: bool,
    pub hidden: bool,
    /// Effective tab index as the browser computes it: negative means the
    /// element is skipped by sequential navigation.
    pub tabindex: i32,
}

impl FocusCandidate {
    pub fn is_tabbable(&self) -> bool {
        !self.disabled && !self.hidden && self.tabindex >= 0
    }
}

/// Effective tab index of an element with tag `tag` and `tabindex`
/// attribute `raw`.
///
/// An attribute that is not an integer is ignored, so the element falls back
/// to its native behaviour: 0 for form controls and links, -1 otherwise.
pub fn effective_tabindex(tag: &str, raw: Option<&str>) -> i32 {
    if let Some(index) = raw.and_then(|r| r.trim().parse::<i32>().ok()) {
        return index;
    }
    if NATIVE_FOCUSABLE.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
        0
    } else {
        -1
    }
}

/// Direction of a Tab press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

impl TabDirection {
    pub fn from_shift(shift: bool) -> Self {
        if shift {
            TabDirection::Backward
        } else {
            TabDirection::Forward
        }
    }
}

/// Index focus must be moved to so it stays inside a list of `len`
/// tabbables, or `None` when the browser's own Tab handling already does.
///
/// `focused` is the position of the focused element in the list, `None` when
/// focus is somewhere outside it.
pub fn wrap_target(len: usize, focused: Option<usize>, direction: TabDirection) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (direction, focused) {
        (TabDirection::Forward, Some(i)) if i >= last => Some(0),
        (TabDirection::Backward, Some(0)) => Some(last),
        (_, Some(_)) => None,
        (TabDirection::Forward, None) => Some(0),
        (TabDirection::Backward, None) => Some(last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_rules() {
        assert!(FocusCandidate::default().is_tabbable());
        assert!(FocusCandidate { tabindex: 2, ..Default::default() }.is_tabbable());
        assert!(!FocusCandidate { tabindex: -1, ..Default::default() }.is_tabbable());
        assert!(!FocusCandidate { disabled: true, ..Default::default() }.is_tabbable());
        assert!(!FocusCandidate { hidden: true, ..Default::default() }.is_tabbable());
    }

    #[test]
    fn test_effective_tabindex() {
        assert_eq!(effective_tabindex("div", Some("0")), 0);
        assert_eq!(effective_tabindex("div", Some(" 3 ")), 3);
        assert_eq!(effective_tabindex("button", Some("-1")), -1);
        assert_eq!(effective_tabindex("BUTTON", None), 0);
        assert_eq!(effective_tabindex("a", None), 0);
    }

    #[test]
    fn test_invalid_tabindex_on_plain_element_is_skipped() {
        let tabindex = effective_tabindex("div", Some("abc"));
        assert_eq!(tabindex, -1);
        assert!(!FocusCandidate { tabindex, ..Default::default() }.is_tabbable());

        // Native controls keep their own focusability.
        let tabindex = effective_tabindex("input", Some("abc"));
        assert!(FocusCandidate { tabindex, ..Default::default() }.is_tabbable());
    }

    #[test]
    fn test_wrap_at_edges() {
        assert_eq!(wrap_target(3, Some(2), TabDirection::Forward), Some(0));
        assert_eq!(wrap_target(3, Some(0), TabDirection::Backward), Some(2));
    }

    #[test]
    fn test_interior_is_left_to_browser() {
        assert_eq!(wrap_target(3, Some(0), TabDirection::Forward), None);
        assert_eq!(wrap_target(3, Some(1), TabDirection::Backward), None);
    }

    #[test]
    fn test_single_element_wraps_onto_itself() {
        assert_eq!(wrap_target(1, Some(0), TabDirection::Forward), Some(0));
        assert_eq!(wrap_target(1, Some(0), TabDirection::Backward), Some(0));
    }

    #[test]
    fn test_focus_outside_is_pulled_back() {
        assert_eq!(wrap_target(4, None, TabDirection::Forward), Some(0));
        assert_eq!(wrap_target(4, None, TabDirection::Backward), Some(3));
        assert_eq!(wrap_target(0, None, TabDirection::Forward), None);
    }
}
