//! Error types for ringside
//!
//! Uses `thiserror` for library errors; the binaries wrap them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::file_system::FsError;

/// Result type alias for ringside operations
pub type RingsideResult<T> = Result<T, RingsideError>;

/// Main error type for ringside operations
#[derive(Error, Debug)]
pub enum RingsideError {
    /// Source path does not live under the project root
    #[error("cannot resolve '{path}': not inside project root '{root}'")]
    PathResolution { path: PathBuf, root: PathBuf },

    /// Relative path climbs out of the project root with `..`
    #[error("path '{path}' escapes project root '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// File system operation failed
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not valid JSON
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected key absent from the input document
    #[error("missing key '{key}'")]
    MissingKey { key: String },

    /// Key present but holding the wrong kind of value
    #[error("expected '{key}' to be {expected}")]
    WrongType { key: String, expected: &'static str },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Explicitly requested configuration file does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Home directory could not be determined
    #[error("could not determine the home directory")]
    NoHomeDir,
}
