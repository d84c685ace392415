//! Manifest types and parsing for jsxgen.toml files.

mod class;
mod export;
mod file;
mod parse;
mod project;
mod validate;

pub use class::{ClassDecl, MemberDecl, TypeDecl, TypeKind, Visibility};
pub use export::{Exclusion, ExportConfig, ScaffoldConfig};
pub use file::JsxToml;
use indexmap::IndexMap;
pub use project::{OutputConfig, ProjectConfig, ToolkitConfig};
use serde::Deserialize;
pub use validate::ParseContext;

use crate::GLOBAL_TYPES;

/// Root manifest for jsxgen.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Project metadata
    pub project: ProjectConfig,

    /// Toolkit base classes
    #[serde(default)]
    pub toolkit: ToolkitConfig,

    /// Output file locations
    #[serde(default)]
    pub output: OutputConfig,

    /// Generated modules
    #[serde(default)]
    pub exports: Vec<ExportConfig>,

    /// Class graph, keyed by class name
    #[serde(default)]
    pub classes: IndexMap<String, ClassDecl>,

    /// Named types referenced by class members
    #[serde(default)]
    pub types: IndexMap<String, TypeDecl>,
}

impl Manifest {
    /// Get a class by name.
    pub fn class(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.get(name)
    }

    /// Get a named type by name.
    pub fn type_decl(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    /// Get an export by name.
    pub fn export(&self, name: &str) -> Option<&ExportConfig> {
        self.exports.iter().find(|e| e.name == name)
    }

    /// Check if a type name is declared as a class or a named type, or is a
    /// global such as `Array`.
    ///
    /// Qualified names (`Enums.Visibility`) are checked by their first segment.
    pub fn is_known_type(&self, name: &str) -> bool {
        let head = name.split('.').next().unwrap_or(name);
        self.classes.contains_key(head)
            || self.types.contains_key(head)
            || GLOBAL_TYPES.contains(&head)
    }
}
