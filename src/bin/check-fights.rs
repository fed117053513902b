//! check-fights - summarize fight statuses from a JSON document on stdin
//!
//! Usage: check-fights [--lenient] [--json] < fights.json
//!
//! Reads no config file; `RINGSIDE_LENIENT` is the only environment setting.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use ringside::application::{ReportOptions, ReportUseCase};
use ringside::config;
use ringside::domain::entities::FieldPolicy;
use ringside::presentation::{create_report_sink, CheckFightsCli, OutputFormat};

fn main() -> Result<()> {
    let cli = CheckFightsCli::parse();

    let policy = if cli.lenient {
        FieldPolicy::Lenient
    } else {
        config::field_policy_from_env()
    };

    let input = io::read_to_string(io::stdin()).context("failed to read stdin")?;

    let stdout = io::stdout();
    let mut sink = create_report_sink(OutputFormat::from_json_flag(cli.json), stdout.lock());
    ReportUseCase::new(ReportOptions::default().with_policy(policy))
        .execute(&input, sink.as_mut())?;

    Ok(())
}
