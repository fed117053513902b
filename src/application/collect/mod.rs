//! Collect Use Case
//!
//! Copies the configured project sources into a staging directory.
//!
//! This module handles:
//! - Creating the destination root
//! - Classifying each source (file, directory, missing, other)
//! - Re-rooting sources under the destination by their project-relative path
//! - Emitting progress events

mod options;
mod result;
mod use_case;

pub use options::{CollectOptions, CollectPlan};
pub use result::{CollectResult, CopiedSource, SkippedSource};
pub use use_case::CollectUseCase;
