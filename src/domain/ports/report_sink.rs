//! Report Sink Port
//!
//! Receives the fight status report piece by piece, so text output can be
//! written as soon as each count or main-card line is known.
//!
//! Call order: `begin`, `status_count` once per [`StatusLine`] in print
//! order, `begin_main_card`, `main_card_entry` per listed fight, `finish`.
//! A failing record stops the sequence where it is.

use std::io;

use crate::domain::entities::MainCardEntry;
use crate::domain::services::StatusLine;

pub trait ReportSink {
    /// Called once before any count
    fn begin(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// One aggregate count over the whole fight array
    fn status_count(&mut self, line: StatusLine, count: usize) -> io::Result<()>;

    /// Called once after the last count
    fn begin_main_card(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// One main-card line, in array order
    fn main_card_entry(&mut self, entry: &MainCardEntry) -> io::Result<()>;

    /// Called once after the last main-card entry
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
