//! Use Case Factory
//!
//! Creates use cases and sinks with infrastructure dependencies wired up.

use std::io::Write;

use crate::application::CollectUseCase;
use crate::domain::ports::{CollectEventSink, ReportSink};
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs};
use crate::presentation::output::{JsonReportWriter, OutputFormat, TextReportWriter};
use crate::ui::UiContext;

/// Type alias for the collect use case backed by the local file system
pub type ConcreteCollectUseCase = CollectUseCase<LocalFs>;

pub fn create_collect_use_case() -> ConcreteCollectUseCase {
    CollectUseCase::new(LocalFs::new())
}

/// Pick the event sink for the collector's progress output
pub fn create_collect_event_sink(ui: UiContext) -> Box<dyn CollectEventSink> {
    if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ui))
    }
}

/// Pick the report writer for `format`
pub fn create_report_sink<'a, W: Write + 'a>(
    format: OutputFormat,
    out: W,
) -> Box<dyn ReportSink + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextReportWriter::new(out)),
        OutputFormat::Json => Box::new(JsonReportWriter::new(out)),
    }
}
