//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and home directory resolution
//! - `events/` - Collect event sinks (console, NDJSON)

pub mod events;
pub mod fs;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
