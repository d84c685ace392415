//! Core utilities and types for jsxgen.
//!
//! This crate provides the naming rules and file helpers shared by
//! every other jsxgen crate.

mod file;
mod text;
mod utils;

// File operations
pub use file::write_file;
// Type text scanning
pub use text::string_literal_end;
// String utilities
pub use utils::{attribute_class_name, module_basename, to_lower_first, to_pascal_case};
