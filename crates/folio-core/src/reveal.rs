//! One-shot visual effects: reveal, skill bars and chip stagger.

use std::time::Duration;

/// Class added to a `.reveal` element on first sight.
pub const VISIBLE_CLASS: &str = "visible";

/// Fill percentage from a skill bar's `data-percent`. Unparseable values
/// are 0; everything is clamped to `[0, 100]`.
pub fn parse_percent(raw: Option<&str>) -> f64 {
    raw.map(|r| r.trim().trim_end_matches('%'))
        .and_then(|r| r.parse::<f64>().ok())
        .filter(|p| p.is_finite())
        .map_or(0.0, |p| p.clamp(0.0, 100.0))
}

/// CSS width for a percentage.
pub fn percent_width(percent: f64) -> String {
    format!("{percent}%")
}

/// Inline style a chip starts with, before its group is seen.
pub const CHIP_HIDDEN_OPACITY: &str = "0";
pub const CHIP_HIDDEN_TRANSFORM: &str = "translateY(6px)";
pub const CHIP_SHOWN_OPACITY: &str = "1";
pub const CHIP_SHOWN_TRANSFORM: &str = "translateY(0)";

/// Transition values for the chip at `index` once its group is seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipStagger {
    pub transition: String,
    pub delay: String,
}

pub fn chip_stagger(index: usize, step: Duration, transition: Duration) -> ChipStagger {
    let ms = transition.as_millis();
    let delay = step.as_millis() * index as u128;
    ChipStagger {
        transition: format!("opacity {ms}ms ease, transform {ms}ms ease"),
        delay: format!("{delay}ms"),
    }
}
