//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CollectUseCase` - Copies project sources into the staging directory
//! - `ReportUseCase` - Tallies fight statuses and lists the main card

pub mod collect;
pub mod report;

pub use collect::{CollectOptions, CollectPlan, CollectResult, CollectUseCase};
pub use report::{FightStatusReport, ReportOptions, ReportUseCase};
