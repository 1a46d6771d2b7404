//! Page configuration.
//!
//! Every timing and observer threshold the page uses. Defaults reproduce the
//! stock behavior; a page can override any subset by embedding
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "modal_close_ms": 300, "typing_fonts": ["font-mono"] }
//! </script>
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::observe::ObserveOptions;
use crate::spy::SPY_ROOT_MARGIN;
use crate::typing::TypingTimings;

/// Id of the embedded configuration element.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Filter used when the page does not set one.
pub const DEFAULT_LOG_FILTER: &str = "folio=info,folio_core=info";

/// Longest delay a browser timer honours. `setTimeout` takes a signed 32-bit
/// delay, and anything larger wraps and fires at once.
pub const MAX_TIMER_DELAY_MS: u32 = i32::MAX as u32;

/// `duration` as a timer delay in milliseconds, clamped to
/// [`MAX_TIMER_DELAY_MS`].
pub fn timer_delay_ms(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis())
        .unwrap_or(u32::MAX)
        .min(MAX_TIMER_DELAY_MS)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Length of the dialog's closing transition.
    pub modal_close_ms: u64,
    pub typing_speed_ms: u64,
    pub deleting_speed_ms: u64,
    pub hold_after_type_ms: u64,
    pub hold_after_delete_ms: u64,
    /// Font classes the typing loop rotates through, one per round.
    pub typing_fonts: Vec<String>,
    pub reveal_threshold: f64,
    pub skills_threshold: f64,
    pub chips_threshold: f64,
    pub spy_root_margin: String,
    pub spy_threshold: f64,
    pub chip_stagger_ms: u64,
    pub chip_transition_ms: u64,
    /// Scroll idle time before hover effects come back.
    pub hover_idle_ms: u64,
    /// How long the keyboard "hovering" cue stays on a project card.
    pub project_cue_ms: u64,
    /// `tracing_subscriber::EnvFilter` directives.
    pub log_filter: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            modal_close_ms: 250,
            typing_speed_ms: 70,
            deleting_speed_ms: 40,
            hold_after_type_ms: 1800,
            hold_after_delete_ms: 400,
            typing_fonts: vec![
                "font-mono".to_string(),
                "font-serif".to_string(),
                "font-display".to_string(),
            ],
            reveal_threshold: 0.12,
            skills_threshold: 0.35,
            chips_threshold: 0.2,
            spy_root_margin: SPY_ROOT_MARGIN.to_string(),
            spy_threshold: 0.1,
            chip_stagger_ms: 40,
            chip_transition_ms: 300,
            hover_idle_ms: 150,
            project_cue_ms: 300,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl PageConfig {
    /// Parse an override block. Unset fields keep their defaults.
    pub fn from_json(raw: &str) -> FolioResult<Self> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Config from an optional override block.
    pub fn from_optional_json(raw: Option<&str>) -> FolioResult<Self> {
        match raw.map(str::trim).filter(|r| !r.is_empty()) {
            Some(raw) => Self::from_json(raw),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        for (name, value) in [
            ("reveal_threshold", self.reveal_threshold),
            ("skills_threshold", self.skills_threshold),
            ("chips_threshold", self.chips_threshold),
            ("spy_threshold", self.spy_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(FolioError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn modal_close(&self) -> Duration {
        Duration::from_millis(self.modal_close_ms)
    }

    pub fn hover_idle(&self) -> Duration {
        Duration::from_millis(self.hover_idle_ms)
    }

    pub fn project_cue(&self) -> Duration {
        Duration::from_millis(self.project_cue_ms)
    }

    pub fn chip_stagger(&self) -> Duration {
        Duration::from_millis(self.chip_stagger_ms)
    }

    pub fn chip_transition(&self) -> Duration {
        Duration::from_millis(self.chip_transition_ms)
    }

    pub fn typing_timings(&self) -> TypingTimings {
        TypingTimings {
            type_step: Duration::from_millis(self.typing_speed_ms),
            delete_step: Duration::from_millis(self.deleting_speed_ms),
            hold_after_type: Duration::from_millis(self.hold_after_type_ms),
            hold_after_delete: Duration::from_millis(self.hold_after_delete_ms),
        }
    }

    pub fn reveal_options(&self) -> ObserveOptions {
        ObserveOptions::threshold(self.reveal_threshold)
    }

    pub fn skills_options(&self) -> ObserveOptions {
        ObserveOptions::threshold(self.skills_threshold)
    }

    pub fn chips_options(&self) -> ObserveOptions {
        ObserveOptions::threshold(self.chips_threshold)
    }

    pub fn spy_options(&self) -> ObserveOptions {
        ObserveOptions::threshold(self.spy_threshold).with_root_margin(self.spy_root_margin.clone())
    }
}
