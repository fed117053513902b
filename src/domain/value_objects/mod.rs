//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod field_value;
mod path;
mod source_kind;

pub use config_warning::ConfigWarning;
pub use field_value::FieldValue;
pub use path::StagedPath;
pub use source_kind::SourceKind;
