//! Tests for the config module

use super::loader::load_with_warnings;
use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.collect.project_root, PathBuf::from(DEFAULT_PROJECT_ROOT));
    assert_eq!(config.collect.destination, PathBuf::from(DEFAULT_DESTINATION));
    assert_eq!(config.collect.sources.len(), 7);
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
}

#[test]
fn test_default_sources_keep_order() {
    let config = CollectConfig::default();

    assert_eq!(config.sources.first(), Some(&PathBuf::from("projectContext.md")));
    assert_eq!(
        config.sources.last(),
        Some(&PathBuf::from("packages/mobile/store/AuthContext.tsx"))
    );
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[collect]
project_root = "/work/fight-mobile-app"
destination = "/tmp/context"
sources = ["projectContext.md", "packages/mobile/app"]

[output]
color = "never"
unicode = false
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.collect.project_root, PathBuf::from("/work/fight-mobile-app"));
    assert_eq!(config.collect.sources.len(), 2);
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(!config.output.unicode);
}

#[test]
fn test_partial_section_keeps_defaults() {
    let config: Config = toml::from_str("[collect]\ndestination = \"/tmp/x\"\n").unwrap();

    assert_eq!(config.collect.destination, PathBuf::from("/tmp/x"));
    assert_eq!(config.collect.sources.len(), DEFAULT_SOURCES.len());
    assert_eq!(config.collect.project_root, PathBuf::from(DEFAULT_PROJECT_ROOT));
}

#[test]
fn test_resolved_sources_join_relative_entries() {
    let config = CollectConfig {
        project_root: PathBuf::from("/work/app"),
        destination: PathBuf::from("/tmp/out"),
        sources: vec![
            PathBuf::from("packages/backend/src/routes"),
            PathBuf::from("/work/app/projectContext.md"),
        ],
    };

    assert_eq!(
        config.resolved_sources().unwrap(),
        vec![
            PathBuf::from("/work/app/packages/backend/src/routes"),
            PathBuf::from("/work/app/projectContext.md"),
        ]
    );
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nunicode = false\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert!(!config.output.unicode);
    assert!(warnings.is_empty());
}

#[test]
fn test_load_missing_file_fails() {
    let result = load_with_warnings(Path::new("/definitely/not/here/config.toml"));
    assert!(result.is_err());
}

#[test]
fn test_report_section_is_unknown() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[report]\nlenient = true\n").unwrap();

    let (_, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "report");
}

