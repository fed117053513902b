//! Ports (interfaces) the application layer depends on

pub mod collect_events;
pub mod file_system;
pub mod report_sink;

pub use collect_events::{CollectEvent, CollectEventSink, NoopEventSink, SkipReason};
pub use file_system::{FileSystem, FsError, FsResult};
pub use report_sink::ReportSink;
