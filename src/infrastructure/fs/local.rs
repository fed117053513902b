//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::SourceKind;

/// Local file system implementation
///
/// Copies are atomic: content goes to a temp file next to the target, which
/// is then renamed over it. Whatever was at the target path before is
/// replaced without confirmation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn kind(&self, path: &Path) -> FsResult<SourceKind> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(SourceKind::from_metadata(&metadata)),
            Err(e) if is_absent(&e) => Ok(SourceKind::Missing),
            Err(e) => Err(FsError::at(path, e)),
        }
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| FsError::at(path, e))? {
            let entry = entry.map_err(|e| FsError::at(path, e))?;
            children.push(entry.path());
        }
        children.sort();
        Ok(children)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()> {
        copy_atomic(from, to)
    }
}

/// Nothing at the path: not found, or a file where a directory was expected
fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

fn copy_atomic(from: &Path, to: &Path) -> FsResult<()> {
    let parent = to
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut source = File::open(from).map_err(|e| FsError::at(from, e))?;
    let metadata = source.metadata().map_err(|e| FsError::at(from, e))?;

    let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
    io::copy(&mut source, staged.as_file_mut()).map_err(|e| FsError::at(to, e))?;

    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    staged
        .as_file()
        .set_times(times)
        .map_err(|e| FsError::at(to, e))?;
    staged
        .as_file()
        .set_permissions(metadata.permissions())
        .map_err(|e| FsError::at(to, e))?;

    staged.persist(to).map_err(|e| FsError::at(to, e.error))?;
    Ok(())
}
