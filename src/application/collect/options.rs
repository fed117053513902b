//! Collect options

use std::path::PathBuf;

use crate::config::CollectConfig;
use crate::error::RingsideResult;

/// What to copy and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectPlan {
    /// Every source must live under this root
    pub project_root: PathBuf,
    /// Receives the copies
    pub destination: PathBuf,
    /// Sources in copy order
    pub sources: Vec<PathBuf>,
}

impl CollectPlan {
    pub fn new(project_root: PathBuf, destination: PathBuf, sources: Vec<PathBuf>) -> Self {
        Self {
            project_root,
            destination,
            sources,
        }
    }

    /// Build a plan from configuration, expanding `~` and rooting relative sources
    ///
    /// Fails with `NoHomeDir` when a path starts with `~` and the home
    /// directory is unknown.
    pub fn from_config(config: &CollectConfig) -> RingsideResult<Self> {
        Ok(Self {
            project_root: config.resolved_project_root()?,
            destination: config.resolved_destination()?,
            sources: config.resolved_sources()?,
        })
    }
}

/// Options for the collect command
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// Classify and report only; write nothing
    pub dry_run: bool,
}

impl CollectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
