//! Console Event Sink
//!
//! Human-readable progress lines for the collector.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{CollectEvent, CollectEventSink, SkipReason};
use crate::ui::{Icon, UiContext};

pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn render(&self, event: CollectEvent) -> Vec<String> {
        match event {
            CollectEvent::Started {
                destination,
                source_count,
                dry_run,
            } => {
                let mut lines = Vec::new();
                if dry_run {
                    lines.push(format!(
                        "{} Dry run: nothing will be written",
                        self.ui.icon(Icon::Collect)
                    ));
                }
                if self.ui.verbose > 0 {
                    lines.push(format!(
                        "Collecting {} sources into {}",
                        source_count,
                        destination.display()
                    ));
                }
                lines
            }

            CollectEvent::SourceCopied {
                source,
                destination,
                kind,
                files,
                ..
            } => {
                let mut lines = vec![format!(
                    "{} Copied {}",
                    self.ui.icon(Icon::Success),
                    source.display()
                )];
                if self.ui.verbose > 0 {
                    let noun = if files == 1 { "file" } else { "files" };
                    lines.push(format!(
                        "    {} {} ({}, {} {})",
                        self.ui.icon(Icon::Arrow),
                        destination.display(),
                        kind,
                        files,
                        noun
                    ));
                }
                lines
            }

            CollectEvent::SourceSkipped { source, reason, .. } => {
                let label = match reason {
                    SkipReason::Missing => "Skipped missing",
                    SkipReason::Unsupported => "Skipped unsupported",
                };
                vec![format!(
                    "{} {}: {}",
                    self.ui.icon(Icon::Warning),
                    label,
                    source.display()
                )]
            }

            CollectEvent::Completed {
                destination,
                copied_count,
                skipped_count,
                file_count,
            } => {
                let mut lines = vec![String::new()];
                if self.ui.verbose > 0 {
                    lines.push(format!(
                        "{} copied ({} files), {} skipped",
                        copied_count, file_count, skipped_count
                    ));
                }
                lines.push(format!("All done! Files collected in: {}", destination.display()));
                lines
            }
        }
    }
}

impl CollectEventSink for ConsoleEventSink {
    fn on_event(&self, event: CollectEvent) -> io::Result<()> {
        let lines = self.render(event);
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("console writer lock poisoned"))?;
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}
