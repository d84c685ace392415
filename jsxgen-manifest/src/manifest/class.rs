use indexmap::IndexMap;
use serde::Deserialize;

use crate::type_expr::{TypeExpr, TypeSyntaxError, parse_type};

/// A class in the class graph.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassDecl {
    /// Module path the class is exported from (e.g., "@nativescript/core/ui/core/view")
    pub module: String,

    /// Declaration file, defaults to the module basename with `.d.ts`
    pub source: Option<String>,

    /// Direct superclass
    pub extends: Option<String>,

    /// Type parameters of a generic class
    #[serde(default)]
    pub type_params: Vec<String>,

    /// Declared members in declaration order
    #[serde(default)]
    pub members: IndexMap<String, MemberDecl>,
}

impl ClassDecl {
    /// Get the declaration file of this class.
    pub fn source_location(&self) -> String {
        match &self.source {
            Some(source) => source.clone(),
            None => format!("{}.d.ts", jsxgen_core::module_basename(&self.module)),
        }
    }

    /// Check if a name is one of the class's type parameters.
    pub fn has_type_param(&self, name: &str) -> bool {
        self.type_params.iter().any(|p| p == name)
    }
}

/// Member visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// A class member.
///
/// Written either as a bare type string (`width = "number"`) or as a table
/// (`nativeView = { type = "any", visibility = "protected" }`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawMember")]
pub struct MemberDecl {
    pub ty: TypeExpr,
    pub visibility: Visibility,
    pub is_static: bool,
}

impl MemberDecl {
    /// Whether the member is a public instance member.
    pub fn is_public_instance(&self) -> bool {
        self.visibility == Visibility::Public && !self.is_static
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMember {
    Short(String),
    Detailed {
        #[serde(rename = "type")]
        ty: String,
        #[serde(default)]
        visibility: Visibility,
        #[serde(default, rename = "static")]
        is_static: bool,
    },
}

impl TryFrom<RawMember> for MemberDecl {
    type Error = TypeSyntaxError;

    fn try_from(raw: RawMember) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawMember::Short(ty) => Ok(Self {
                ty: parse_type(&ty)?,
                visibility: Visibility::Public,
                is_static: false,
            }),
            RawMember::Detailed {
                ty,
                visibility,
                is_static,
            } => Ok(Self {
                ty: parse_type(&ty)?,
                visibility,
                is_static,
            }),
        }
    }
}

/// Kind of a non-class named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Interface,
    Class,
    Enum,
    Alias,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Interface => "interface",
            TypeKind::Class => "class",
            TypeKind::Enum => "enum",
            TypeKind::Alias => "alias",
        }
    }
}

/// A named type referenced by members (interfaces, enums, aliases, and
/// classes outside the view hierarchy).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawTypeDecl")]
pub struct TypeDecl {
    pub module: String,
    pub kind: TypeKind,
    /// Aliased type, present only for `kind = "alias"`
    pub target: Option<TypeExpr>,
}

#[derive(Deserialize)]
struct RawTypeDecl {
    module: String,
    kind: TypeKind,
    target: Option<String>,
}

impl TryFrom<RawTypeDecl> for TypeDecl {
    type Error = TypeSyntaxError;

    fn try_from(raw: RawTypeDecl) -> std::result::Result<Self, Self::Error> {
        let target = raw.target.as_deref().map(parse_type).transpose()?;
        Ok(Self {
            module: raw.module,
            kind: raw.kind,
            target,
        })
    }
}
