//! Collect result types

use std::path::PathBuf;

use crate::domain::ports::SkipReason;
use crate::domain::value_objects::SourceKind;

/// A source that was copied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedSource {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub kind: SourceKind,
    /// Regular files written (1 for a file source)
    pub files: usize,
}

/// A source that was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSource {
    pub source: PathBuf,
    pub reason: SkipReason,
}

/// Result of a collect operation
#[derive(Debug, Clone)]
pub struct CollectResult {
    pub destination: PathBuf,
    pub copied: Vec<CopiedSource>,
    pub skipped: Vec<SkippedSource>,
}

impl CollectResult {
    pub fn new(destination: PathBuf) -> Self {
        Self {
            destination,
            copied: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn add_copied(&mut self, copied: CopiedSource) {
        self.copied.push(copied);
    }

    pub fn add_skipped(&mut self, source: PathBuf, reason: SkipReason) {
        self.skipped.push(SkippedSource { source, reason });
    }

    /// Total regular files written across all sources
    pub fn file_count(&self) -> usize {
        self.copied.iter().map(|c| c.files).sum()
    }
}
