//! Collect Event Port
//!
//! Provides an observable interface for the context collector.
//! Drives console progress lines and the `--json` NDJSON stream.

use std::io;
use std::path::PathBuf;

use crate::domain::value_objects::SourceKind;

/// Why a source was not copied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Source does not exist
    Missing,
    /// Source exists but is neither a file nor a directory
    Unsupported,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Missing => "missing",
            SkipReason::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted while collecting sources
#[derive(Debug, Clone)]
pub enum CollectEvent {
    /// Collection started
    Started {
        destination: PathBuf,
        source_count: usize,
        dry_run: bool,
    },

    /// A source was copied (or would be, in a dry run)
    SourceCopied {
        index: usize,
        source: PathBuf,
        destination: PathBuf,
        kind: SourceKind,
        files: usize,
    },

    /// A source was skipped
    SourceSkipped {
        index: usize,
        source: PathBuf,
        reason: SkipReason,
    },

    /// Collection finished
    Completed {
        destination: PathBuf,
        copied_count: usize,
        skipped_count: usize,
        file_count: usize,
    },
}

/// Trait for receiving collect events
///
/// Implementations:
/// - ConsoleEventSink: progress lines in the terminal
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: silent operation
///
/// A write failure is returned to the caller, which stops the run.
pub trait CollectEventSink {
    fn on_event(&self, event: CollectEvent) -> io::Result<()>;
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CollectEventSink for NoopEventSink {
    fn on_event(&self, _event: CollectEvent) -> io::Result<()> {
        Ok(())
    }
}
