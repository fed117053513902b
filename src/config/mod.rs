//! Configuration module for ringside
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RINGSIDE_*)
//! 3. Config file (`--config`, `RINGSIDE_CONFIG`, `~/.config/ringside/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{field_policy_from_env, load};
pub use types::{
    CollectConfig, ColorMode, Config, OutputConfig, DEFAULT_DESTINATION, DEFAULT_PROJECT_ROOT,
    DEFAULT_SOURCES,
};
