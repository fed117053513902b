//! Fight status counting
//!
//! Counts are taken over the whole fight array, not just the main card.
//! Each summary line is tallied on its own, in print order, so a record
//! missing `isComplete` only fails once the earlier lines are known.

use serde::Serialize;

use crate::domain::entities::{FieldPolicy, FightCard, FightRecord};
use crate::error::RingsideResult;

/// One line of the status summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Total,
    Started,
    Complete,
    Live,
}

impl StatusLine {
    /// Summary lines in print order
    pub const ALL: [StatusLine; 4] = [
        StatusLine::Total,
        StatusLine::Started,
        StatusLine::Complete,
        StatusLine::Live,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusLine::Total => "Total fights",
            StatusLine::Started => "Has started",
            StatusLine::Complete => "Complete",
            StatusLine::Live => "Live (started but not complete)",
        }
    }
}

/// Aggregate fight statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub started: usize,
    pub complete: usize,
    /// Started but not complete
    pub live: usize,
}

impl StatusCounts {
    /// Tally every summary line.
    ///
    /// Every record must carry `hasStarted`, then every record must carry
    /// `isComplete`; the first absent flag fails in strict mode.
    pub fn tally(card: &FightCard, policy: FieldPolicy) -> RingsideResult<Self> {
        let mut counts = Self::default();
        for line in StatusLine::ALL {
            counts.set(line, Self::count(card, line, policy)?);
        }
        Ok(counts)
    }

    /// Tally a single summary line over the whole card
    pub fn count(card: &FightCard, line: StatusLine, policy: FieldPolicy) -> RingsideResult<usize> {
        match line {
            StatusLine::Total => Ok(card.len()),
            StatusLine::Started => count_where(card, |record| {
                Ok(record.has_started(policy)?.is_truthy())
            }),
            StatusLine::Complete => count_where(card, |record| {
                Ok(record.is_complete(policy)?.is_truthy())
            }),
            // isComplete is only read for started records
            StatusLine::Live => count_where(card, |record| {
                if !record.has_started(policy)?.is_truthy() {
                    return Ok(false);
                }
                Ok(!record.is_complete(policy)?.is_truthy())
            }),
        }
    }

    pub fn set(&mut self, line: StatusLine, count: usize) {
        match line {
            StatusLine::Total => self.total = count,
            StatusLine::Started => self.started = count,
            StatusLine::Complete => self.complete = count,
            StatusLine::Live => self.live = count,
        }
    }

    /// Tally `(has_started, is_complete)` pairs
    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = (bool, bool)>,
    {
        flags
            .into_iter()
            .fold(Self::default(), |mut counts, (started, complete)| {
                counts.total += 1;
                if started {
                    counts.started += 1;
                }
                if complete {
                    counts.complete += 1;
                }
                if started && !complete {
                    counts.live += 1;
                }
                counts
            })
    }
}

fn count_where(
    card: &FightCard,
    mut predicate: impl FnMut(&FightRecord<'_>) -> RingsideResult<bool>,
) -> RingsideResult<usize> {
    let mut count = 0;
    for record in card.records() {
        if predicate(&record)? {
            count += 1;
        }
    }
    Ok(count)
}
