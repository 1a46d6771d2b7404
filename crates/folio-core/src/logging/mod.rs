//! Structured logging for the page runtime.
//!
//! Events go through `tracing` as everywhere else. [`ConsoleLayer`] renders
//! each one into a [`JsonLogEntry`] and hands it to a [`LogSink`]; in the
//! browser the sink is the developer console, in tests it is a
//! [`MemorySink`].
//!
//! ## Usage
//!
//! ```ignore
//! use folio_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new(ConsoleSink)
//!     .with_filter("folio=debug,folio_core=debug")
//!     .init()?;
//! ```

pub mod entry;
pub mod layer;

// Re-exports for convenience
pub use entry::JsonLogEntry;
pub use layer::{ConsoleLayer, LogSink, LoggingBuilder, MemorySink};
