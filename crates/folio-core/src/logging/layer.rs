//! Custom tracing Layer that renders events into [`JsonLogEntry`] values.

use std::fmt::Write as FmtWrite;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::JsonLogEntry;
use crate::config::DEFAULT_LOG_FILTER;
use crate::error::{FolioError, FolioResult};

/// Destination of rendered log entries.
pub trait LogSink {
    fn write(&self, entry: &JsonLogEntry);
}

/// Sink that keeps every entry in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<JsonLogEntry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<JsonLogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LogSink for MemorySink {
    fn write(&self, entry: &JsonLogEntry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
    }
}

/// A tracing Layer that writes every event to a [`LogSink`].
pub struct ConsoleLayer<K> {
    sink: K,
}

impl<K: LogSink> ConsoleLayer<K> {
    pub fn new(sink: K) -> Self {
        Self { sink }
    }
}

impl<S, K> Layer<S> for ConsoleLayer<K>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    K: LogSink + 'static,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = metadata.level().as_str().to_lowercase();

        let mut visitor = JsonVisitor::new();
        event.record(&mut visitor);

        let message = visitor.message.unwrap_or_default();
        let mut entry = JsonLogEntry::new(&level, metadata.target(), message);

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        self.sink.write(&entry);
    }
}

/// Visitor that extracts fields from tracing events.
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn new() -> Self {
        Self {
            message: None,
            fields: serde_json::Map::new(),
        }
    }

    fn insert_text(&mut self, field: &Field, text: String) {
        if field.name() == "message" {
            self.message = Some(text);
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(text));
        }
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);
        self.insert_text(field, buf);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert_text(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Bool(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::Number(n));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::Value::String(value.to_string()),
        );
    }
}

/// Builder for the global subscriber: an `EnvFilter` in front of a
/// [`ConsoleLayer`].
pub struct LoggingBuilder<K> {
    sink: K,
    filter: String,
}

impl<K: LogSink + Send + Sync + 'static> LoggingBuilder<K> {
    pub fn new(sink: K) -> Self {
        Self {
            sink,
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Set the filter directives (e.g., "folio=debug,folio_core=info").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Build the layer alone, for manual composition.
    pub fn build_layer(self) -> ConsoleLayer<K> {
        ConsoleLayer::new(self.sink)
    }

    /// Install as the global default subscriber.
    pub fn init(self) -> FolioResult<()> {
        let filter = EnvFilter::try_new(&self.filter)
            .map_err(|e| FolioError::Config(format!("invalid log filter {:?}: {e}", self.filter)))?;
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(ConsoleLayer::new(self.sink));
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| FolioError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_layer_captures_events() {
        let sink = MemorySink::new();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(sink.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Test message");
            tracing::warn!(count = 42, theme = "gt", "Warning with field");
        });

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msg, "Test message");
        assert_eq!(entries[0].level, "info");
        assert!(entries[1].is_warning());
        let fields = entries[1].fields.as_ref().unwrap();
        assert_eq!(fields["count"], 42);
        assert_eq!(fields["theme"], "gt");
    }

    #[test]
    fn test_span_path_recorded() {
        let sink = MemorySink::new();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(sink.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let _boot = tracing::info_span!("boot").entered();
            let _modal = tracing::info_span!("modal").entered();
            tracing::debug!("inside");
        });

        assert_eq!(sink.entries()[0].span.as_deref(), Some("boot > modal"));
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let err = LoggingBuilder::new(MemorySink::new())
            .with_filter("folio=notalevel")
            .init()
            .unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }
}
