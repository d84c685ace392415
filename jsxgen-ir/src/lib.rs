//! Declaration document types for jsxgen.
//!
//! This crate defines the [`Document`] handed from the class-graph compiler
//! to the declaration renderers, together with the definitions it is built
//! from.
//!
//! # Architecture
//!
//! ```text
//! jsxgen.toml → jsxgen-manifest (class graph) → jsxgen-codegen (walk, alias) → Document → renderers
//! ```
//!
//! A document is self-contained: parents are referenced by attribute class
//! name and every type expression only uses aliases listed in its imports.

mod class;
mod document;

pub use class::{AttributeClassDefinition, AttributePropertyDefinition, DerivedFrom, PropertyOrigin};
pub use document::{Document, ImportAlias, IntrinsicElementDefinition, references_identifier};
