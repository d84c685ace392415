//! Core operations.
//!
//! This module contains the business logic for jsxgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod info;

pub use bake::{BakeOptions, bake};
pub use check::check;
pub use info::info;
use jsxgen_codegen::Diagnostic;

/// One-line description of a diagnostic, prefixed with its export.
pub(crate) fn describe(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("[{}] {}\n  --> {}", diag.export, diag.message, loc),
        None => format!("[{}] {}", diag.export, diag.message),
    }
}
