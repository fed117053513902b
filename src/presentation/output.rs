//! Output Rendering
//!
//! Report sinks for the fight status report:
//! - `TextReportWriter` - the fixed-format text report, written line by line
//! - `JsonReportWriter` - one JSON document, written once the report is complete

use std::io::{self, Write};

use crate::domain::entities::{MainCardEntry, MAIN_CARD_SIZE};
use crate::domain::ports::ReportSink;
use crate::domain::services::{StatusCounts, StatusLine};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub struct TextReportWriter<W: Write> {
    out: W,
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextReportWriter<W> {
    fn begin(&mut self) -> io::Result<()> {
        writeln!(self.out, "Fight statuses in database:")?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn status_count(&mut self, line: StatusLine, count: usize) -> io::Result<()> {
        writeln!(self.out, "{}: {}", line.label(), count)?;
        self.out.flush()
    }

    fn begin_main_card(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Main card (first {}):", MAIN_CARD_SIZE)?;
        self.out.flush()
    }

    fn main_card_entry(&mut self, entry: &MainCardEntry) -> io::Result<()> {
        writeln!(self.out, "  {}", entry)?;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

pub struct JsonReportWriter<W: Write> {
    out: W,
    counts: StatusCounts,
    main_card: Vec<MainCardEntry>,
}

impl<W: Write> JsonReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            counts: StatusCounts::default(),
            main_card: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonReportWriter<W> {
    fn status_count(&mut self, line: StatusLine, count: usize) -> io::Result<()> {
        self.counts.set(line, count);
        Ok(())
    }

    fn main_card_entry(&mut self, entry: &MainCardEntry) -> io::Result<()> {
        self.main_card.push(entry.clone());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        let document = serde_json::json!({
            "event": "report",
            "command": "check-fights",
            "counts": self.counts,
            "main_card": self.main_card,
        });
        writeln!(self.out, "{}", document)?;
        self.out.flush()
    }
}
