//! Class-graph abstraction.
//!
//! The walker never talks to a type checker directly. Everything it needs
//! about classes and member types goes through [`ClassGraphProvider`], which
//! keeps the declaration compiler independent of where the class graph comes
//! from. [`ManifestProvider`] is the implementation backed by `jsxgen.toml`.

mod manifest;
mod wrapping;

use std::{collections::HashSet, fmt};

pub use manifest::{ManifestProvider, ManifestType};
pub use wrapping::WrappingKind;

use crate::{BuildError, Result};

/// How a type should be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Canonical text. Named types are printed as `import("module").Name`
    /// references and aliases are kept by name.
    Canonical,
    /// Text suitable for the right-hand side of a type alias. Aliases are
    /// expanded and output is never truncated.
    InDeclaration,
}

/// Structural classification of a type, seen through aliases.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeShape<T> {
    /// A union of the contained member types.
    Union(Vec<T>),
    /// A class, interface, array, object or function type.
    Structured,
    /// Anything else (keywords, literals, enums, type parameters).
    Other,
}

/// Member visibility as reported by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// An instance member of a class.
#[derive(Debug, Clone)]
pub struct MemberInfo<T> {
    pub name: String,
    pub visibility: Visibility,
    /// Declared type of the member.
    pub ty: T,
    /// Source file the member is declared in.
    pub source: String,
    /// Whether the member has a declaration site the type can be printed
    /// relative to. Synthesized members have none.
    pub has_declaration_site: bool,
}

/// A type that cannot be printed as portable declaration text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrepresentable {
    pub reason: String,
}

impl Unrepresentable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Unrepresentable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// A declared superclass that cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAncestor {
    pub name: String,
}

/// Source of class declarations and type information.
pub trait ClassGraphProvider {
    /// Handle to a class; borrowed for the duration of one build.
    type Class: Clone + fmt::Debug;
    /// Handle to a member type.
    type Type: Clone;

    /// Look up a class by its declared name.
    fn lookup_class(&self, name: &str) -> Option<Self::Class>;

    /// Declared name of the class.
    fn class_name(&self, class: &Self::Class) -> String;

    /// Identity that distinguishes two classes with the same name.
    fn class_identity(&self, class: &Self::Class) -> String;

    /// Source file the class is declared in.
    fn source_location(&self, class: &Self::Class) -> String;

    /// The direct superclass, if any.
    fn direct_ancestor(
        &self,
        class: &Self::Class,
    ) -> std::result::Result<Option<Self::Class>, MissingAncestor>;

    /// Non-static members declared directly on the class, in declaration order.
    fn instance_members(&self, class: &Self::Class) -> Vec<MemberInfo<Self::Type>>;

    /// Classify a type.
    fn type_shape(&self, ty: &Self::Type) -> TypeShape<Self::Type>;

    /// Print a type.
    fn print_type(
        &self,
        ty: &Self::Type,
        mode: FormatMode,
    ) -> std::result::Result<String, Unrepresentable>;
}

/// Collect the ancestors of a class, nearest first.
pub fn ancestor_chain<P: ClassGraphProvider>(
    provider: &P,
    class: &P::Class,
) -> Result<Vec<P::Class>> {
    let mut chain = Vec::new();
    let mut seen = HashSet::new();
    seen.insert(provider.class_identity(class));

    let mut current = class.clone();
    loop {
        let next = provider
            .direct_ancestor(&current)
            .map_err(|missing| BuildError::UnresolvableAncestor {
                class: provider.class_name(&current),
                ancestor: missing.name,
            })?;

        let Some(next) = next else {
            return Ok(chain);
        };

        if !seen.insert(provider.class_identity(&next)) {
            return Err(BuildError::CyclicInheritance {
                class: provider.class_name(class),
            });
        }

        chain.push(next.clone());
        current = next;
    }
}
