//! JSON Event Sink
//!
//! Outputs collect events as NDJSON for automation.

use crate::domain::ports::{CollectEvent, CollectEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("json writer lock poisoned"))?;
        writeln!(writer, "{}", event)?;
        writer.flush()
    }
}

impl CollectEventSink for JsonEventSink {
    fn on_event(&self, event: CollectEvent) -> io::Result<()> {
        let json = match event {
            CollectEvent::Started {
                destination,
                source_count,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "collect",
                    "destination": destination.display().to_string(),
                    "source_count": source_count,
                    "dry_run": dry_run,
                })
            }

            CollectEvent::SourceCopied {
                index,
                source,
                destination,
                kind,
                files,
            } => {
                serde_json::json!({
                    "event": "item_copied",
                    "command": "collect",
                    "index": index,
                    "source": source.display().to_string(),
                    "destination": destination.display().to_string(),
                    "kind": kind,
                    "files": files,
                })
            }

            CollectEvent::SourceSkipped {
                index,
                source,
                reason,
            } => {
                serde_json::json!({
                    "event": "item_skipped",
                    "command": "collect",
                    "index": index,
                    "source": source.display().to_string(),
                    "reason": reason.as_str(),
                })
            }

            CollectEvent::Completed {
                destination,
                copied_count,
                skipped_count,
                file_count,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "collect",
                    "destination": destination.display().to_string(),
                    "copied": copied_count,
                    "skipped": skipped_count,
                    "files": file_count,
                })
            }
        };

        self.write_event(json)
    }
}
