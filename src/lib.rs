//! Ringside - operator tooling for the fight app
//!
//! Two small command-line tools share this library:
//! - `collect-context` copies a fixed set of project files into a staging
//!   directory, keeping their paths relative to the project root
//! - `check-fights` reads a fight API response on stdin and prints status
//!   counts plus the first five fights

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{
    CollectOptions, CollectPlan, CollectResult, CollectUseCase, FightStatusReport, ReportOptions,
    ReportUseCase,
};
pub use config::Config;
pub use domain::entities::{FieldPolicy, FightCard, MainCardEntry};
pub use domain::services::StatusCounts;
pub use error::{RingsideError, RingsideResult};
