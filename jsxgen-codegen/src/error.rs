//! Errors that abort a document build.

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum BuildError {
    #[error("superclass '{ancestor}' of '{class}' cannot be loaded")]
    #[diagnostic(
        code(jsxgen::unresolvable_ancestor),
        help("declare '{ancestor}' under [classes.{ancestor}]")
    )]
    UnresolvableAncestor { class: String, ancestor: String },

    #[error("attribute class '{class_name}' is produced by both '{existing}' and '{incoming}'")]
    #[diagnostic(
        code(jsxgen::name_collision),
        help("two classes map to the same attribute type name; rename one or split them into separate exports")
    )]
    NameCollision {
        class_name: String,
        existing: String,
        incoming: String,
    },

    #[error("element tag '{tag}' is produced by both '{existing}' and '{incoming}'")]
    #[diagnostic(
        code(jsxgen::tag_collision),
        help("two root classes lower-case to the same tag; request them from separate exports")
    )]
    TagCollision {
        tag: String,
        existing: String,
        incoming: String,
    },

    #[error("type of '{class}.{member}' cannot be represented: {reason}")]
    #[diagnostic(
        code(jsxgen::unrepresentable_type),
        help("make the member non-public or give it a concrete type")
    )]
    UnrepresentableType {
        class: String,
        member: String,
        reason: String,
    },

    #[error("no free alias for '{symbol}' from '{module_path}'")]
    #[diagnostic(
        code(jsxgen::alias_exhaustion),
        help("every numbered suffix is taken; split the export into smaller modules")
    )]
    AliasExhaustion { symbol: String, module_path: String },

    #[error("inheritance cycle through '{class}'")]
    #[diagnostic(code(jsxgen::cyclic_inheritance))]
    CyclicInheritance { class: String },

    #[error("root class '{name}' is not in the class graph")]
    #[diagnostic(code(jsxgen::unknown_root))]
    UnknownRoot { name: String },
}
