//! Staged Path Value Object
//!
//! A source path's location relative to the project root.
//! The relative part is what gets re-rooted under the destination:
//! - Must be a descendant of the project root
//! - No traversal components (..) after stripping the root

use std::path::{Component, Path, PathBuf};

use crate::error::{RingsideError, RingsideResult};

/// A source path resolved against the project root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StagedPath {
    relative: PathBuf,
}

impl StagedPath {
    /// Resolve `source` relative to `project_root`.
    ///
    /// The comparison is lexical; symlinks are not resolved. The project root
    /// itself resolves to an empty relative path.
    pub fn resolve(source: &Path, project_root: &Path) -> RingsideResult<Self> {
        let relative =
            source
                .strip_prefix(project_root)
                .map_err(|_| RingsideError::PathResolution {
                    path: source.to_path_buf(),
                    root: project_root.to_path_buf(),
                })?;

        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(RingsideError::PathEscape {
                path: source.to_path_buf(),
                root: project_root.to_path_buf(),
            });
        }

        Ok(Self {
            relative: relative.to_path_buf(),
        })
    }

    /// Path relative to the project root
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Where this source lands under `destination_root`
    pub fn destination_in(&self, destination_root: &Path) -> PathBuf {
        if self.relative.as_os_str().is_empty() {
            destination_root.to_path_buf()
        } else {
            destination_root.join(&self.relative)
        }
    }
}

impl std::fmt::Display for StagedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.relative.display())
    }
}
