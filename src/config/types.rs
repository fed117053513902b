//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RingsideResult;
use crate::infrastructure::fs::expand_home;

/// Project checkout the collector reads from
pub const DEFAULT_PROJECT_ROOT: &str = r"C:\Users\avoca\fight-mobile-app";

/// Staging directory the collector writes to
pub const DEFAULT_DESTINATION: &str = "~/Desktop/context-persistence-files";

/// Sources copied by default, relative to the project root, in copy order
pub const DEFAULT_SOURCES: &[&str] = &[
    "projectContext.md",
    "packages/backend/prisma/schema.prisma",
    "packages/backend/src/routes",
    "packages/mobile/app",
    "packages/shared/src/types",
    "packages/backend/src/middleware/auth.ts",
    "packages/mobile/store/AuthContext.tsx",
];

/// Context collector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectConfig {
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,

    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    /// Relative entries are joined onto `project_root`
    #[serde(default = "default_sources")]
    pub sources: Vec<PathBuf>,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            destination: default_destination(),
            sources: default_sources(),
        }
    }
}

impl CollectConfig {
    /// Project root with `~` expanded
    pub fn resolved_project_root(&self) -> RingsideResult<PathBuf> {
        expand_home(&self.project_root)
    }

    /// Destination root with `~` expanded
    pub fn resolved_destination(&self) -> RingsideResult<PathBuf> {
        expand_home(&self.destination)
    }

    /// Sources as absolute-or-rooted paths, in configured order
    pub fn resolved_sources(&self) -> RingsideResult<Vec<PathBuf>> {
        let root = self.resolved_project_root()?;
        self.sources
            .iter()
            .map(|source| resolve_source(source, &root))
            .collect()
    }
}

fn resolve_source(source: &Path, root: &Path) -> RingsideResult<PathBuf> {
    let expanded = expand_home(source)?;
    if expanded.is_absolute() || expanded.has_root() {
        Ok(expanded)
    } else {
        Ok(root.join(expanded))
    }
}

fn default_project_root() -> PathBuf {
    PathBuf::from(DEFAULT_PROJECT_ROOT)
}

fn default_destination() -> PathBuf {
    PathBuf::from(DEFAULT_DESTINATION)
}

fn default_sources() -> Vec<PathBuf> {
    DEFAULT_SOURCES.iter().map(PathBuf::from).collect()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub collect: CollectConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
