//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the Windows system API rather than
//! environment variables, so setting `HOME` in tests has no effect there.
//! `ringside_home_dir()` checks `RINGSIDE_TEST_HOME` first and falls back to
//! `dirs::home_dir()`.
//!
//! Used for the default destination (`~/Desktop/...`), the user config
//! fallback and `~` expansion in configured paths.

use std::path::{Path, PathBuf};

use crate::error::{RingsideError, RingsideResult};

/// Environment variable for test isolation of home directory.
pub const RINGSIDE_TEST_HOME_VAR: &str = "RINGSIDE_TEST_HOME";

/// Get the home directory, honoring `RINGSIDE_TEST_HOME`.
pub fn ringside_home_dir() -> Option<PathBuf> {
    std::env::var(RINGSIDE_TEST_HOME_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Expand a leading `~` to the home directory.
///
/// Paths without a leading `~` are returned unchanged. A leading `~` with
/// no known home directory is an error rather than a literal `~` directory.
pub fn expand_home(path: &Path) -> RingsideResult<PathBuf> {
    expand_home_with(path, ringside_home_dir().as_deref())
}

fn expand_home_with(path: &Path, home: Option<&Path>) -> RingsideResult<PathBuf> {
    let text = path.to_string_lossy();
    let rest = if text == "~" {
        Some("")
    } else {
        text.strip_prefix("~/").or_else(|| text.strip_prefix("~\\"))
    };

    match (rest, home) {
        (None, _) => Ok(path.to_path_buf()),
        (Some(_), None) => Err(RingsideError::NoHomeDir),
        (Some(""), Some(home)) => Ok(home.to_path_buf()),
        (Some(rest), Some(home)) => Ok(home.join(rest)),
    }
}
