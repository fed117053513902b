//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Report formatting (text/JSON)

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{CheckFightsCli, CollectCli, ColorWhen};
pub use factory::{create_collect_event_sink, create_collect_use_case, create_report_sink};
pub use output::{JsonReportWriter, OutputFormat, TextReportWriter};
