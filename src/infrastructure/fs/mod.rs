//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;

pub use home::{expand_home, ringside_home_dir, RINGSIDE_TEST_HOME_VAR};
pub use local::LocalFs;
