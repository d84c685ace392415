//! Class-graph compiler for jsxgen.
//!
//! Turns a set of root widget classes into a self-contained
//! [`Document`](jsxgen_ir::Document) that the declaration renderers consume.
//!
//! # Module Organization
//!
//! - [`graph`] - Class-graph abstraction ([`ClassGraphProvider`]) and the manifest-backed provider
//! - [`normalize`] - Member type to portable declaration text
//! - [`walker`] - Memoized inheritance walk producing attribute class definitions
//! - [`aliases`] - Rewrites `import("...")` references to short aliases
//! - [`document`] - Assembles one document per export
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (FileRegistry, FileEntry, etc.)
//! - [`diagnostic`] - Non-fatal generation findings

pub mod aliases;
pub mod builder;
pub mod diagnostic;
pub mod document;
mod error;
pub mod generation;
pub mod graph;
pub mod normalize;
pub mod walker;

pub use aliases::{ImportRegistry, MAX_ALIAS_SUFFIX};
pub use diagnostic::Diagnostic;
pub use document::DocumentBuilder;
pub use error::{BuildError, Result};
pub use graph::{
    ClassGraphProvider, FormatMode, ManifestProvider, ManifestType, MemberInfo, MissingAncestor,
    TypeShape, Unrepresentable, Visibility, WrappingKind, ancestor_chain,
};
pub use normalize::TypeNormalizer;
pub use walker::{ClassGraphWalker, ClassRegistry};
