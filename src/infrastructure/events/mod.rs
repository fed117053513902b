//! Event Sink Implementations
//!
//! Concrete implementations of CollectEventSink:
//! - ConsoleEventSink: progress lines for terminals
//! - JsonEventSink: NDJSON output for automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
