//! Fight status report use case
//!
//! Parses the input document, tallies statuses over the whole fight array,
//! then walks the main card. Output is pushed to a [`ReportSink`] as it is
//! produced: a record failing in strict mode leaves earlier lines written,
//! whether it fails a count or a main-card line.

use serde::Serialize;

use crate::domain::entities::{FieldPolicy, FightCard, MainCardEntry};
use crate::domain::ports::ReportSink;
use crate::domain::services::{StatusCounts, StatusLine};
use crate::error::RingsideResult;

/// Options for the report command
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub policy: FieldPolicy,
}

impl ReportOptions {
    pub fn with_policy(mut self, policy: FieldPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Everything the report printed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FightStatusReport {
    pub counts: StatusCounts,
    pub main_card: Vec<MainCardEntry>,
}

pub struct ReportUseCase {
    options: ReportOptions,
}

impl ReportUseCase {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn execute(&self, input: &str, sink: &mut dyn ReportSink) -> RingsideResult<FightStatusReport> {
        let card = FightCard::parse(input)?;
        self.execute_card(&card, sink)
    }

    pub fn execute_card(
        &self,
        card: &FightCard,
        sink: &mut dyn ReportSink,
    ) -> RingsideResult<FightStatusReport> {
        let policy = self.options.policy;

        sink.begin()?;
        let mut counts = StatusCounts::default();
        for line in StatusLine::ALL {
            let count = StatusCounts::count(card, line, policy)?;
            counts.set(line, count);
            sink.status_count(line, count)?;
        }
        sink.begin_main_card()?;

        let mut main_card = Vec::new();
        for record in card.main_card() {
            let entry = MainCardEntry::from_record(&record, policy)?;
            sink.main_card_entry(&entry)?;
            main_card.push(entry);
        }
        sink.finish()?;

        Ok(FightStatusReport { counts, main_card })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RingsideError;
    use std::io;

    #[derive(Default)]
    struct RecordingSink {
        counts: Vec<(StatusLine, usize)>,
        main_card_started: bool,
        entries: Vec<String>,
        finished: bool,
    }

    impl ReportSink for RecordingSink {
        fn status_count(&mut self, line: StatusLine, count: usize) -> io::Result<()> {
            self.counts.push((line, count));
            Ok(())
        }

        fn begin_main_card(&mut self) -> io::Result<()> {
            self.main_card_started = true;
            Ok(())
        }

        fn main_card_entry(&mut self, entry: &MainCardEntry) -> io::Result<()> {
            self.entries.push(entry.to_string());
            Ok(())
        }

        fn finish(&mut self) -> io::Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    fn fights_json(count: usize) -> String {
        let fights: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"hasStarted":{},"isComplete":false,"fighter1":{{"firstName":"Red{i}","lastName":"R"}},"fighter2":{{"firstName":"Blue{i}","lastName":"B"}}}}"#,
                    i % 2 == 0
                )
            })
            .collect();
        format!(r#"{{"fights":[{}]}}"#, fights.join(","))
    }

    #[test]
    fn example_document() {
        let input = r#"{"fights":[{"hasStarted":true,"isComplete":false,"fighter1":{"firstName":"Jon","lastName":"Jones"},"fighter2":{"firstName":"Tom","lastName":"Aspinall"}}]}"#;
        let mut sink = RecordingSink::default();

        let report = ReportUseCase::new(ReportOptions::default())
            .execute(input, &mut sink)
            .unwrap();

        assert_eq!(
            report.counts,
            StatusCounts {
                total: 1,
                started: 1,
                complete: 0,
                live: 1
            }
        );
        assert_eq!(
            sink.entries,
            vec!["Jon Jones vs Tom Aspinall: hasStarted=True, complete=False"]
        );
        assert!(sink.finished);
    }

    #[test]
    fn main_card_stops_at_five() {
        let mut sink = RecordingSink::default();

        let report = ReportUseCase::new(ReportOptions::default())
            .execute(&fights_json(7), &mut sink)
            .unwrap();

        assert_eq!(report.counts.total, 7);
        assert_eq!(report.counts.started, 4);
        assert_eq!(sink.entries.len(), 5);
        assert!(sink.entries[0].starts_with("Red0 R vs Blue0 B"));
        assert!(sink.entries[4].starts_with("Red4 R vs Blue4 B"));
    }

    #[test]
    fn empty_fights_list() {
        let mut sink = RecordingSink::default();

        let report = ReportUseCase::new(ReportOptions::default())
            .execute(r#"{"fights": []}"#, &mut sink)
            .unwrap();

        assert_eq!(report.counts, StatusCounts::default());
        assert!(sink.entries.is_empty());
        assert_eq!(sink.counts.len(), 4);
        assert!(sink.main_card_started);
    }

    #[test]
    fn missing_flag_keeps_counts_already_written() {
        let input = r#"{"fights":[{"hasStarted":true}]}"#;
        let mut sink = RecordingSink::default();

        let err = ReportUseCase::new(ReportOptions::default())
            .execute(input, &mut sink)
            .unwrap_err();

        assert!(matches!(err, RingsideError::MissingKey { ref key } if key == "fights[0].isComplete"));
        assert_eq!(
            sink.counts,
            vec![(StatusLine::Total, 1), (StatusLine::Started, 1)]
        );
        assert!(!sink.main_card_started);
    }

    #[test]
    fn strict_failure_keeps_earlier_entries() {
        let input = r#"{"fights":[
            {"hasStarted":true,"isComplete":true,"fighter1":{"firstName":"A","lastName":"B"},"fighter2":{"firstName":"C","lastName":"D"}},
            {"hasStarted":false,"isComplete":false,"fighter1":{"firstName":"E"},"fighter2":{"firstName":"G","lastName":"H"}}
        ]}"#;
        let mut sink = RecordingSink::default();

        let err = ReportUseCase::new(ReportOptions::default())
            .execute(input, &mut sink)
            .unwrap_err();

        assert!(matches!(err, RingsideError::MissingKey { ref key } if key == "fights[1].fighter1.lastName"));
        assert_eq!(sink.entries.len(), 1);
        assert!(!sink.finished);
    }

    #[test]
    fn lenient_mode_completes() {
        let input = r#"{"fights":[{"fighter1":{"firstName":"E"}}]}"#;
        let mut sink = RecordingSink::default();

        let report = ReportUseCase::new(ReportOptions::default().with_policy(FieldPolicy::Lenient))
            .execute(input, &mut sink)
            .unwrap();

        assert_eq!(report.main_card.len(), 1);
        assert_eq!(sink.entries[0], "E ? vs ? ?: hasStarted=False, complete=False");
    }

    #[test]
    fn missing_fights_key_is_fatal_even_when_lenient() {
        let mut sink = RecordingSink::default();

        let err = ReportUseCase::new(ReportOptions::default().with_policy(FieldPolicy::Lenient))
            .execute(r#"{"data": []}"#, &mut sink)
            .unwrap_err();

        assert!(matches!(err, RingsideError::MissingKey { .. }));
        assert!(sink.counts.is_empty());
    }
}
