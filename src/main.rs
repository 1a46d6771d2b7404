//! Folio - interactive layer for a static portfolio page.
//!
//! Built for `wasm32-unknown-unknown` (e.g. with `trunk build`), the binary
//! attaches to the already-rendered page: theme toggle, mobile navigation,
//! project details dialog, typing loop and the scroll/intersection observers.
//!
//! A native build is a small helper that validates a page configuration
//! block and prints the resolved values.

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod context;
#[cfg(target_arch = "wasm32")]
mod logging;

#[cfg(target_arch = "wasm32")]
fn main() {
    app::boot();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;
    use folio_core::PageConfig;

    /// Folio - check a page configuration block
    #[derive(Parser, Debug)]
    #[command(name = "folio")]
    #[command(about = "Validate a folio-config JSON block and print the resolved configuration")]
    struct Args {
        /// JSON file with the contents of the `#folio-config` element.
        /// Prints the defaults when omitted.
        config: Option<PathBuf>,
    }

    pub fn run() -> ExitCode {
        tracing_subscriber::fmt::init();

        let args = Args::parse();

        let raw = match args.config.as_ref().map(std::fs::read_to_string) {
            Some(Ok(raw)) => Some(raw),
            Some(Err(e)) => {
                tracing::error!(path = ?args.config, error = %e, "Failed to read config");
                return ExitCode::FAILURE;
            }
            None => None,
        };

        let config = match PageConfig::from_optional_json(raw.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Invalid page config");
                return ExitCode::FAILURE;
            }
        };

        match serde_json::to_string_pretty(&config) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to render config");
                ExitCode::FAILURE
            }
        }
    }
}
