//! Domain Layer
//!
//! Pure logic for both tools, without direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Fight card, fight records, main-card entries
//! - `value_objects/` - Immutable value types (StagedPath, SourceKind, FieldValue)
//! - `services/` - Stateless computations (status counts)
//! - `ports/` - Interface definitions for infrastructure and presentation

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
