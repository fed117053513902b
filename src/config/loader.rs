//! Configuration loading
//!
//! Priority, highest first:
//! 1. Environment variables (`RINGSIDE_*`)
//! 2. Config file (`--config`, `RINGSIDE_CONFIG`, or the user config)
//! 3. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::FieldPolicy;
use crate::error::{RingsideError, RingsideResult};
use crate::infrastructure::fs::ringside_home_dir;

use super::types::Config;

pub use crate::domain::value_objects::ConfigWarning;

/// Names an explicit config file
pub const CONFIG_ENV_VAR: &str = "RINGSIDE_CONFIG";

/// Turns on lenient field handling for `check-fights`
pub const LENIENT_ENV_VAR: &str = "RINGSIDE_LENIENT";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RingsideResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

fn parse_with_warnings(content: &str, path: &Path) -> RingsideResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RingsideError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load configuration for a run.
///
/// An explicit path (CLI flag or `RINGSIDE_CONFIG`) must exist; a missing
/// user config just means defaults. Environment overrides apply last.
pub fn load(explicit: Option<&Path>) -> RingsideResult<(Config, Vec<ConfigWarning>)> {
    let explicit = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

    let (config, warnings) = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(RingsideError::ConfigNotFound { path });
            }
            load_with_warnings(&path)?
        }
        None => match user_config_path().filter(|p| p.exists()) {
            Some(path) => load_with_warnings(&path)?,
            None => (Config::default(), Vec::new()),
        },
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (RINGSIDE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var_os(key))
}

fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<std::ffi::OsString>,
) -> Config {
    // RINGSIDE_PROJECT_ROOT
    if let Some(root) = get_env("RINGSIDE_PROJECT_ROOT").filter(|v| !v.is_empty()) {
        config.collect.project_root = PathBuf::from(root);
    }

    // RINGSIDE_DESTINATION
    if let Some(dest) = get_env("RINGSIDE_DESTINATION").filter(|v| !v.is_empty()) {
        config.collect.destination = PathBuf::from(dest);
    }

    // RINGSIDE_SOURCES (OS path-list separated)
    if let Some(sources) = get_env("RINGSIDE_SOURCES") {
        let parsed: Vec<PathBuf> = std::env::split_paths(&sources)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        if !parsed.is_empty() {
            config.collect.sources = parsed;
        }
    }

    config
}

/// Field policy from `RINGSIDE_LENIENT`.
///
/// `check-fights` reads no config file, so this is its only setting
/// besides the CLI flag.
pub fn field_policy_from_env() -> FieldPolicy {
    field_policy_from(|key| std::env::var_os(key))
}

fn field_policy_from(get_env: impl Fn(&str) -> Option<std::ffi::OsString>) -> FieldPolicy {
    match get_env(LENIENT_ENV_VAR) {
        Some(val) => {
            let val = val.to_string_lossy().to_lowercase();
            if val.is_empty() || val == "0" || val == "false" {
                FieldPolicy::Strict
            } else {
                FieldPolicy::Lenient
            }
        }
        None => FieldPolicy::Strict,
    }
}

/// `$XDG_CONFIG_HOME/ringside/config.toml`, else `~/.config/ringside/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| ringside_home_dir().map(|h| h.join(".config")))
        .map(|dir| dir.join("ringside").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "collect",
        "project_root",
        "destination",
        "sources",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
