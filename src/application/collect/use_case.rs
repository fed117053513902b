//! Collect Use Case
//!
//! Orchestrates copying sources into the staging directory.

use std::path::Path;

use crate::domain::ports::{CollectEvent, CollectEventSink, FileSystem, FsError, SkipReason};
use crate::domain::value_objects::{SourceKind, StagedPath};
use crate::error::RingsideResult;

use super::options::{CollectOptions, CollectPlan};
use super::result::{CollectResult, CopiedSource};

/// Collect use case - mirrors project sources under a destination root
pub struct CollectUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CollectUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new collect use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Copy every existing source; skip missing ones.
    ///
    /// Existing destination files at colliding paths are overwritten and
    /// directories are merged into. A source outside the project root, any
    /// file system failure, or a failed event write aborts the run.
    pub fn execute(
        &self,
        plan: &CollectPlan,
        options: &CollectOptions,
        events: &dyn CollectEventSink,
    ) -> RingsideResult<CollectResult> {
        events.on_event(CollectEvent::Started {
            destination: plan.destination.clone(),
            source_count: plan.sources.len(),
            dry_run: options.dry_run,
        })?;

        if !options.dry_run {
            self.fs.create_dir_all(&plan.destination)?;
        }

        let mut result = CollectResult::new(plan.destination.clone());

        for (index, source) in plan.sources.iter().enumerate() {
            let kind = self.fs.kind(source)?;
            let reason = match kind {
                SourceKind::Missing => Some(SkipReason::Missing),
                SourceKind::Other => Some(SkipReason::Unsupported),
                SourceKind::File | SourceKind::Directory => None,
            };
            if let Some(reason) = reason {
                result.add_skipped(source.clone(), reason);
                events.on_event(CollectEvent::SourceSkipped {
                    index,
                    source: source.clone(),
                    reason,
                })?;
                continue;
            }

            let staged = StagedPath::resolve(source, &plan.project_root)?;
            let destination = staged.destination_in(&plan.destination);

            let files = if kind == SourceKind::Directory {
                self.copy_tree(source, &destination, options.dry_run)?
            } else {
                self.copy_single(source, &destination, options.dry_run)?;
                1
            };

            result.add_copied(CopiedSource {
                source: source.clone(),
                destination: destination.clone(),
                kind,
                files,
            });
            events.on_event(CollectEvent::SourceCopied {
                index,
                source: source.clone(),
                destination,
                kind,
                files,
            })?;
        }

        events.on_event(CollectEvent::Completed {
            destination: plan.destination.clone(),
            copied_count: result.copied.len(),
            skipped_count: result.skipped.len(),
            file_count: result.file_count(),
        })?;

        Ok(result)
    }

    fn copy_single(&self, from: &Path, to: &Path, dry_run: bool) -> RingsideResult<()> {
        if dry_run {
            return Ok(());
        }
        if let Some(parent) = to.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.copy_file(from, to)?;
        Ok(())
    }

    /// Recursively copy `from` into `to`, returning the number of files.
    /// Special files inside the tree are ignored. An entry that stops
    /// resolving (a dangling symlink) is an error.
    fn copy_tree(&self, from: &Path, to: &Path, dry_run: bool) -> RingsideResult<usize> {
        if !dry_run {
            self.fs.create_dir_all(to)?;
        }

        let mut files = 0;
        for child in self.fs.read_dir(from)? {
            let Some(name) = child.file_name() else {
                continue;
            };
            let target = to.join(name);
            match self.fs.kind(&child)? {
                SourceKind::Directory => files += self.copy_tree(&child, &target, dry_run)?,
                SourceKind::File => {
                    if !dry_run {
                        self.fs.copy_file(&child, &target)?;
                    }
                    files += 1;
                }
                SourceKind::Other => {}
                SourceKind::Missing => return Err(FsError::NotFound(child).into()),
            }
        }
        Ok(files)
    }
}
