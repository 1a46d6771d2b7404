//! Browser console sink for `folio_core::logging`.

use folio_core::logging::{JsonLogEntry, LogSink, LoggingBuilder};

/// Writes each entry as one JSON line to the developer console, at the
/// console level matching the event level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, entry: &JsonLogEntry) {
        let line = match entry.to_json_line() {
            Ok(line) => line,
            Err(_) => format!("[{}] {}: {}", entry.level, entry.target, entry.msg),
        };
        match entry.level.as_str() {
            "error" => gloo::console::error!(line),
            "warn" => gloo::console::warn!(line),
            "debug" | "trace" => gloo::console::debug!(line),
            _ => gloo::console::log!(line),
        }
    }
}

/// Install the global subscriber, falling back to the default filter when
/// the configured one does not parse.
pub fn init(filter: &str) {
    let result = LoggingBuilder::new(ConsoleSink)
        .with_filter(filter)
        .init()
        .or_else(|_| LoggingBuilder::new(ConsoleSink).init());
    if let Err(e) = result {
        gloo::console::warn!(format!("folio: logging unavailable: {e}"));
    }
}
