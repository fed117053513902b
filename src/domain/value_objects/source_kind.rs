//! Source kind value object - what a collector source is on disk

use serde::Serialize;

/// Classification of a source path at copy time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Regular file
    File,
    /// Directory, copied recursively
    Directory,
    /// Exists but is neither (socket, fifo, device)
    Other,
    /// Does not exist
    Missing,
}

impl SourceKind {
    /// Classify from file metadata
    pub fn from_metadata(metadata: &std::fs::Metadata) -> Self {
        let file_type = metadata.file_type();
        if file_type.is_dir() {
            SourceKind::Directory
        } else if file_type.is_file() {
            SourceKind::File
        } else {
            SourceKind::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::File => "file",
            SourceKind::Directory => "directory",
            SourceKind::Other => "other",
            SourceKind::Missing => "missing",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
