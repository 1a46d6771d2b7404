use tracing::{debug, info, info_span, warn};

use folio_core::{FolioResult, PageConfig};

use crate::components;
use crate::context::{self, Page};
use crate::logging;

/// Attach every feature to the page.
///
/// Features are independent: one that fails to install is logged and
/// skipped, and the rest still come up.
pub fn boot() {
    let (config, config_error) = match context::read_config() {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };

    logging::init(&config.log_filter);
    if let Some(e) = config_error {
        warn!(error = %e, "Ignoring page config, using defaults");
    }

    let page = match Page::new(config) {
        Ok(page) => page,
        Err(e) => {
            warn!(error = %e, "No document to attach to");
            return;
        }
    };

    let _boot = info_span!("boot").entered();

    install("footer year", components::footer::install(&page));
    install("scroll progress", components::scroll_progress::install(&page));
    install("hover guard", components::hover_guard::install(&page));
    install("theme toggle", components::theme_toggle::install(&page));
    install("mobile nav", components::mobile_nav::install(&page));
    install("typing", components::typing::install(&page));
    install("reveal", components::observers::install_reveal(&page));
    install("skill bars", components::observers::install_skill_bars(&page));
    install("chip stagger", components::observers::install_chips(&page));
    install("scroll spy", components::scroll_spy::install(&page));
    install("project modal", components::project_modal::install(&page));
    install("contact glow", components::contact_glow::install(&page));

    info!("Page ready");
}

fn install(feature: &str, result: FolioResult<()>) {
    match result {
        Ok(()) => debug!(feature, "Installed"),
        Err(e) => warn!(feature, error = %e, "Feature disabled"),
    }
}
