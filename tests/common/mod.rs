//! Common test utilities for ringside CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp project and home directories
//! - `TestResult`: Captured exit status and output of one CLI run

pub mod env;

pub use env::*;
