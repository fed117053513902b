//! Test environment builder for isolated ringside testing.
//!
//! Provides `TestEnv` - temp directories for the project root and the home
//! directory, plus helpers to run both binaries against them.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Default staging directory below the home directory
pub const DESTINATION_IN_HOME: &str = "Desktop/context-persistence-files";

/// Result of running a ringside CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory standing in for the fight app checkout
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// The default destination, resolved against the test home
    pub fn destination(&self) -> PathBuf {
        self.home_path(DESTINATION_IN_HOME)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write a file to the home directory
    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        write_file(&self.home_path(relative_path), content);
    }

    /// Run `collect-context` with `sources` given relative to the project root
    pub fn run_collect(&self, sources: &[&str], args: &[&str]) -> TestResult {
        let sources: Vec<PathBuf> = sources.iter().map(|s| self.project_path(s)).collect();
        self.run_collect_paths(&sources, args)
    }

    /// Run `collect-context` with absolute source paths
    pub fn run_collect_paths(&self, sources: &[PathBuf], args: &[&str]) -> TestResult {
        let joined = std::env::join_paths(sources).expect("Failed to join source paths");

        let output = self
            .command(env!("CARGO_BIN_EXE_collect-context"))
            .args(args)
            .env("RINGSIDE_PROJECT_ROOT", self.project_root.path())
            .env("RINGSIDE_SOURCES", joined)
            .output()
            .expect("Failed to execute collect-context");

        TestResult::from_output(output)
    }

    /// Run `check-fights` with `input` piped to stdin
    pub fn run_check_fights(&self, input: &str, args: &[&str]) -> TestResult {
        self.run_check_fights_with_env(input, args, &[])
    }

    pub fn run_check_fights_with_env(
        &self,
        input: &str,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = self.command(env!("CARGO_BIN_EXE_check-fights"));
        cmd.args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute check-fights");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        let output = child.wait_with_output().expect("Failed to wait on check-fights");

        TestResult::from_output(output)
    }

    fn command(&self, bin: &str) -> Command {
        let home = self.home_dir.path();
        let mut cmd = Command::new(bin);
        cmd.current_dir(self.project_root.path())
            .env("HOME", home)
            .env("USERPROFILE", home)
            .env("RINGSIDE_TEST_HOME", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RINGSIDE_CONFIG")
            .env_remove("RINGSIDE_DESTINATION")
            .env_remove("RINGSIDE_LENIENT");
        cmd
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
