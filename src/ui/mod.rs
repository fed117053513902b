//! Terminal UI helpers shared by both binaries
//!
//! - `theme` - color and icon tokens
//! - `icon` - icon rendering with ASCII fallback
//! - `terminal` - capability detection (tty, NO_COLOR, CI)
//! - `context` - resolved output settings for one run

pub mod context;
pub mod icon;
pub mod terminal;
pub mod theme;

pub use context::UiContext;
pub use icon::Icon;
